//! Request contexts handed to metadata providers

use super::override_store::OverrideStore;
use crate::shared::presentation::registry::PresentationRegistry;

/// Context for the seeding phase.
#[derive(Debug, Clone, Copy)]
pub struct AddMetadataRequest<'a> {
    /// Entity index the metadata is being built for.
    pub entity_index: &'a str,
    pub registry: &'a PresentationRegistry,
}

impl<'a> AddMetadataRequest<'a> {
    pub fn new(entity_index: &'a str, registry: &'a PresentationRegistry) -> Self {
        Self {
            entity_index,
            registry,
        }
    }
}

/// Context for the declared-override phase.
#[derive(Debug, Clone, Copy)]
pub struct DeclaredOverrideRequest<'a> {
    pub entity_index: &'a str,
    pub registry: &'a PresentationRegistry,
}

impl<'a> DeclaredOverrideRequest<'a> {
    pub fn new(entity_index: &'a str, registry: &'a PresentationRegistry) -> Self {
        Self {
            entity_index,
            registry,
        }
    }
}

/// Context for the config-override phase.
#[derive(Debug, Clone, Copy)]
pub struct ConfigOverrideRequest<'a> {
    /// Uppermost entity type of the screen being built. Deployment
    /// overrides target it rather than any concrete subtype.
    pub ceiling_entity: &'a str,
    /// Deployment scope key, when the installation runs with one.
    pub config_key: Option<&'a str>,
    pub store: &'a OverrideStore,
}

impl<'a> ConfigOverrideRequest<'a> {
    pub fn new(ceiling_entity: &'a str, config_key: Option<&'a str>, store: &'a OverrideStore) -> Self {
        Self {
            ceiling_entity,
            config_key,
            store,
        }
    }
}
