//! Presentation metadata contracts for admin entity editing screens
//!
//! Three layers feed one resolved layout:
//!
//! 1. [`ClassPresentation`] descriptors declare the base tab/group layout of
//!    an entity class as compile-time tables.
//! 2. Descriptor-declared override entries ([`TabPresentationOverride`],
//!    [`GroupPresentationOverride`]) adjust single properties of that layout.
//! 3. Deployment override files contribute [`MetadataOverride`] patches,
//!    which get the last word.
//!
//! The resolved result is a map of tab name to [`TabMetadata`], ready to be
//! serialized for the UI.

mod descriptor;
mod metadata;
mod overrides;

pub use descriptor::{
    ClassPresentation,
    GroupPresentation,
    GroupPresentationOverride,
    GroupProperty,
    TabPresentation,
    TabPresentationOverride,
    TabProperty,
};
pub use metadata::{sorted_tabs, GroupMetadata, ProviderResponse, TabMetadata};
pub use overrides::{FieldOverride, GroupOverride, MetadataOverride, TabOverride};
