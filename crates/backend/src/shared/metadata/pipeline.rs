//! Provider pipeline that resolves screen metadata per entity

use std::collections::HashMap;

use contracts::shared::presentation::TabMetadata;

use super::basic_provider::BasicMetadataProvider;
use super::override_store::OverrideStore;
use super::provider::{EntityMetadataProvider, ResolveError};
use super::requests::{AddMetadataRequest, ConfigOverrideRequest, DeclaredOverrideRequest};
use crate::shared::presentation::registry::PresentationRegistry;

/// Runs registered providers over the three resolve phases in `order()`
/// sequence. One metadata map is threaded through all phases, so later
/// providers and phases refine what earlier ones built.
pub struct MetadataPipeline {
    providers: Vec<Box<dyn EntityMetadataProvider>>,
}

impl MetadataPipeline {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Pipeline with the stock tab/group provider registered.
    pub fn with_basic() -> Self {
        let mut pipeline = Self::new();
        pipeline.register(Box::new(BasicMetadataProvider));
        pipeline
    }

    /// Adds a provider, keeping the run order sorted by `order()`.
    /// Registration order breaks ties.
    pub fn register(&mut self, provider: Box<dyn EntityMetadataProvider>) {
        self.providers.push(provider);
        self.providers.sort_by_key(|provider| provider.order());
    }

    /// Resolves the full tab/group metadata for one entity. The entity
    /// index doubles as the ceiling for config override targeting.
    pub fn resolve(
        &self,
        entity_index: &str,
        config_key: Option<&str>,
        registry: &PresentationRegistry,
        store: &OverrideStore,
    ) -> Result<HashMap<String, TabMetadata>, ResolveError> {
        let mut metadata = HashMap::new();

        let add_request = AddMetadataRequest::new(entity_index, registry);
        for provider in &self.providers {
            let response = provider.add_tab_and_group_metadata(&add_request, &mut metadata)?;
            tracing::debug!("Seed phase for '{entity_index}': {response:?}");
        }

        let declared_request = DeclaredOverrideRequest::new(entity_index, registry);
        for provider in &self.providers {
            let response =
                provider.override_metadata_via_declaration(&declared_request, &mut metadata)?;
            tracing::debug!("Declared override phase for '{entity_index}': {response:?}");
        }

        let config_request = ConfigOverrideRequest::new(entity_index, config_key, store);
        for provider in &self.providers {
            let response =
                provider.override_metadata_via_config(&config_request, &mut metadata)?;
            tracing::debug!("Config override phase for '{entity_index}': {response:?}");
        }

        Ok(metadata)
    }
}

impl Default for MetadataPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::provider::provider_order;
    use contracts::shared::presentation::{
        ClassPresentation, GroupPresentation, ProviderResponse, TabPresentation,
        TabPresentationOverride, TabProperty,
    };

    static MARKETPLACE: ClassPresentation = ClassPresentation {
        friendly_name: "Marketplace",
        tabs: &[TabPresentation {
            name: "General",
            order: 1000,
            groups: &[GroupPresentation {
                name: "marketplace_settings",
                order: 1000,
                column: 0,
                untitled: false,
                collapsed: false,
                tooltip: None,
            }],
        }],
        tab_overrides: &[TabPresentationOverride {
            tab_name: "General",
            property: TabProperty::Order,
            value: "100",
        }],
        group_overrides: &[],
    };

    fn registry() -> PresentationRegistry {
        let mut registry = PresentationRegistry::new();
        registry.register("a005_marketplace", &MARKETPLACE).unwrap();
        registry
    }

    /// Appends its stamp to a trace tab during the seed phase.
    struct StampProvider {
        tier: i32,
        stamp: &'static str,
    }

    impl EntityMetadataProvider for StampProvider {
        fn add_tab_and_group_metadata(
            &self,
            _request: &AddMetadataRequest<'_>,
            metadata: &mut HashMap<String, TabMetadata>,
        ) -> Result<ProviderResponse, ResolveError> {
            let trace = metadata
                .entry("trace".to_string())
                .or_insert_with(|| TabMetadata::new(""));
            trace.name.push_str(self.stamp);
            Ok(ProviderResponse::Handled)
        }

        fn order(&self) -> i32 {
            self.tier
        }
    }

    #[test]
    fn test_resolve_layers_all_three_phases() {
        let registry = registry();
        let store = OverrideStore::from_toml_str(
            r#"
            [scope."a005_marketplace"."General-@-marketplace_settings"]
            type = "group"
            collapsed = true
            "#,
        )
        .unwrap();

        let pipeline = MetadataPipeline::with_basic();
        let metadata = pipeline
            .resolve("a005_marketplace", None, &registry, &store)
            .unwrap();

        let general = &metadata["General"];
        // Seeded order 1000, declared override lowered it to 100.
        assert_eq!(general.order, Some(100));
        // Config override landed last.
        assert_eq!(general.groups["marketplace_settings"].collapsed, Some(true));
    }

    #[test]
    fn test_providers_run_in_order_sequence() {
        let mut pipeline = MetadataPipeline::new();
        pipeline.register(Box::new(StampProvider {
            tier: provider_order::SUPPLEMENTARY,
            stamp: "second",
        }));
        pipeline.register(Box::new(StampProvider {
            tier: provider_order::BASIC,
            stamp: "first",
        }));

        let metadata = pipeline
            .resolve("anything", None, &PresentationRegistry::new(), &OverrideStore::empty())
            .unwrap();

        assert_eq!(metadata["trace"].name, "firstsecond");
    }

    #[test]
    fn test_empty_pipeline_resolves_to_empty_map() {
        let pipeline = MetadataPipeline::default();
        let metadata = pipeline
            .resolve("a005_marketplace", None, &registry(), &OverrideStore::empty())
            .unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_resolve_propagates_provider_errors() {
        let registry = registry();
        let store = OverrideStore::from_toml_str(
            r#"
            [scope."a005_marketplace"."broken_key"]
            type = "group"
            order = 1
            "#,
        )
        .unwrap();

        let err = MetadataPipeline::with_basic()
            .resolve("a005_marketplace", None, &registry, &store)
            .unwrap_err();
        assert!(matches!(err, ResolveError::MalformedGroupKey(_)));
    }
}
