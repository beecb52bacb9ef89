//! Builtin presentation descriptor catalog
//!
//! One module per entity family, each exporting a `'static`
//! [`ClassPresentation`](contracts::shared::presentation::ClassPresentation).
//! `default_registry` assembles them into a [`PresentationRegistry`];
//! `ADMIN_PRESENTATIONS` is the shared instance the binary uses.

use once_cell::sync::Lazy;

use super::registry::{PresentationRegistry, RegistryError};

pub mod a004_nomenclature;
pub mod a005_marketplace;
pub mod a007_marketplace_product;
pub mod a011_ozon_fbo_posting;
pub mod marketplace_document;

pub use a004_nomenclature::NOMENCLATURE_PRESENTATION;
pub use a005_marketplace::MARKETPLACE_PRESENTATION;
pub use a007_marketplace_product::MARKETPLACE_PRODUCT_PRESENTATION;
pub use a011_ozon_fbo_posting::OZON_FBO_POSTING_PRESENTATION;
pub use marketplace_document::MARKETPLACE_DOCUMENT_PRESENTATION;

/// Entity indexes served by the builtin catalog.
pub mod entity_index {
    pub const NOMENCLATURE: &str = "a004_nomenclature";
    pub const MARKETPLACE: &str = "a005_marketplace";
    pub const MARKETPLACE_PRODUCT: &str = "a007_marketplace_product";
    pub const MARKETPLACE_DOCUMENT: &str = "marketplace_document";
    pub const OZON_FBS_POSTING: &str = "a010_ozon_fbs_posting";
    pub const OZON_FBO_POSTING: &str = "a011_ozon_fbo_posting";
}

/// Assembles the builtin catalog. FBS postings inherit the shared
/// marketplace document screen; FBO postings carry their own.
pub fn default_registry() -> Result<PresentationRegistry, RegistryError> {
    let mut registry = PresentationRegistry::new();
    registry.register(entity_index::NOMENCLATURE, &NOMENCLATURE_PRESENTATION)?;
    registry.register(entity_index::MARKETPLACE, &MARKETPLACE_PRESENTATION)?;
    registry.register(
        entity_index::MARKETPLACE_PRODUCT,
        &MARKETPLACE_PRODUCT_PRESENTATION,
    )?;
    registry.register(
        entity_index::MARKETPLACE_DOCUMENT,
        &MARKETPLACE_DOCUMENT_PRESENTATION,
    )?;
    registry.register_subtype(
        entity_index::OZON_FBS_POSTING,
        entity_index::MARKETPLACE_DOCUMENT,
    )?;
    registry.register(
        entity_index::OZON_FBO_POSTING,
        &OZON_FBO_POSTING_PRESENTATION,
    )?;
    Ok(registry)
}

/// Shared catalog instance. The builtin descriptors are checked by the
/// tests below, so assembly does not fail at runtime.
pub static ADMIN_PRESENTATIONS: Lazy<PresentationRegistry> =
    Lazy::new(|| default_registry().expect("builtin presentation catalog is valid"));
