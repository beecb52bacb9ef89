//! Provider contract for the entity metadata pipeline

use std::collections::HashMap;

use contracts::shared::presentation::{ProviderResponse, TabMetadata};
use thiserror::Error;

use super::requests::{AddMetadataRequest, ConfigOverrideRequest, DeclaredOverrideRequest};

/// Provider tiers. The pipeline runs providers in ascending `order()`.
pub mod provider_order {
    /// Stock tier that seeds and adjusts the basic tab/group layout.
    pub const BASIC: i32 = 1_000;
    /// Tier for providers layering on top of the basic layout.
    pub const SUPPLEMENTARY: i32 = 10_000;
}

/// Errors raised while resolving metadata for one entity.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid value '{value}' for {property} override on '{target}': {reason}")]
    InvalidOverrideValue {
        target: String,
        property: &'static str,
        value: String,
        reason: String,
    },
    #[error("Group override key '{0}' must have the form '<tab>-@-<group>'")]
    MalformedGroupKey(String),
}

/// One contributor to the resolved metadata of an entity.
///
/// The pipeline calls the three phases in fixed order: seed, declared
/// overrides, config overrides. Every provider finishes a phase before any
/// provider starts the next, so an overriding phase always sees the fully
/// seeded layout. Default bodies answer [`ProviderResponse::NotHandled`],
/// letting implementors write only the phases they participate in.
pub trait EntityMetadataProvider: Send + Sync {
    /// Seeds the tabs and groups declared for the entity.
    fn add_tab_and_group_metadata(
        &self,
        _request: &AddMetadataRequest<'_>,
        _metadata: &mut HashMap<String, TabMetadata>,
    ) -> Result<ProviderResponse, ResolveError> {
        Ok(ProviderResponse::NotHandled)
    }

    /// Applies single-property overrides declared alongside the layout.
    fn override_metadata_via_declaration(
        &self,
        _request: &DeclaredOverrideRequest<'_>,
        _metadata: &mut HashMap<String, TabMetadata>,
    ) -> Result<ProviderResponse, ResolveError> {
        Ok(ProviderResponse::NotHandled)
    }

    /// Applies overrides from deployment override files.
    fn override_metadata_via_config(
        &self,
        _request: &ConfigOverrideRequest<'_>,
        _metadata: &mut HashMap<String, TabMetadata>,
    ) -> Result<ProviderResponse, ResolveError> {
        Ok(ProviderResponse::NotHandled)
    }

    /// Position in the pipeline; lower runs first.
    fn order(&self) -> i32 {
        provider_order::BASIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::override_store::OverrideStore;
    use crate::shared::presentation::registry::PresentationRegistry;

    struct NoopProvider;

    impl EntityMetadataProvider for NoopProvider {}

    #[test]
    fn test_default_phases_answer_not_handled() {
        let provider = NoopProvider;
        let registry = PresentationRegistry::new();
        let store = OverrideStore::empty();
        let mut metadata = HashMap::new();

        let seeded = provider
            .add_tab_and_group_metadata(
                &AddMetadataRequest::new("a004_nomenclature", &registry),
                &mut metadata,
            )
            .unwrap();
        let declared = provider
            .override_metadata_via_declaration(
                &DeclaredOverrideRequest::new("a004_nomenclature", &registry),
                &mut metadata,
            )
            .unwrap();
        let configured = provider
            .override_metadata_via_config(
                &ConfigOverrideRequest::new("a004_nomenclature", None, &store),
                &mut metadata,
            )
            .unwrap();

        assert_eq!(seeded, ProviderResponse::NotHandled);
        assert_eq!(declared, ProviderResponse::NotHandled);
        assert_eq!(configured, ProviderResponse::NotHandled);
        assert!(metadata.is_empty());
        assert_eq!(provider.order(), provider_order::BASIC);
    }

    #[test]
    fn test_order_tiers_are_spaced() {
        assert!(provider_order::BASIC < provider_order::SUPPLEMENTARY);
    }
}
