//! Deployment override files: loading and scope targeting

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use contracts::shared::presentation::MetadataOverride;
use serde::Deserialize;

/// Parsed deployment override file.
///
/// Scopes are keyed either by a deployment config key or by a ceiling
/// entity index:
///
/// ```toml
/// [scope."a004_nomenclature"."General-@-nomenclature_dimensions"]
/// type = "group"
/// tooltip = "Dimensions used for logistics"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverrideStore {
    #[serde(default, rename = "scope")]
    scopes: HashMap<String, HashMap<String, MetadataOverride>>,
}

impl OverrideStore {
    /// Store with no overrides, for installations that ship none.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Reading override file {}", path.display()))?;
        let store = toml::from_str(&contents)
            .with_context(|| format!("Parsing override file {}", path.display()))?;
        Ok(store)
    }

    /// Overrides for one resolve run. A scope registered under the
    /// deployment config key wins over one registered under the ceiling
    /// entity index.
    pub fn targeted(
        &self,
        config_key: Option<&str>,
        ceiling_entity: &str,
    ) -> Option<&HashMap<String, MetadataOverride>> {
        if let Some(key) = config_key {
            if let Some(overrides) = self.scopes.get(key) {
                return Some(overrides);
            }
        }
        self.scopes.get(ceiling_entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::presentation::TabOverride;

    const SAMPLE: &str = r#"
        [scope."a004_nomenclature"."General"]
        type = "tab"
        order = 500

        [scope."a004_nomenclature"."General-@-nomenclature_dimensions"]
        type = "group"
        tooltip = "Weight and size"

        [scope."mobile"."General"]
        type = "tab"
        name = "Main"

        [scope."a007_marketplace_product"."sku"]
        type = "field"
        friendlyName = "SKU"
    "#;

    #[test]
    fn test_parses_all_override_kinds() {
        let store = OverrideStore::from_toml_str(SAMPLE).unwrap();

        let nomenclature = store.targeted(None, "a004_nomenclature").unwrap();
        assert!(matches!(
            nomenclature.get("General"),
            Some(MetadataOverride::Tab(tab)) if tab.order == Some(500)
        ));
        assert!(matches!(
            nomenclature.get("General-@-nomenclature_dimensions"),
            Some(MetadataOverride::Group(group))
                if group.tooltip.as_deref() == Some("Weight and size")
        ));

        let product = store.targeted(None, "a007_marketplace_product").unwrap();
        assert!(matches!(
            product.get("sku"),
            Some(MetadataOverride::Field(field))
                if field.friendly_name.as_deref() == Some("SKU")
        ));
    }

    #[test]
    fn test_targeted_prefers_config_key_scope() {
        let store = OverrideStore::from_toml_str(SAMPLE).unwrap();

        let overrides = store.targeted(Some("mobile"), "a004_nomenclature").unwrap();
        let expected = maplit::hashmap! {
            "General".to_string() => MetadataOverride::Tab(TabOverride {
                name: Some("Main".to_string()),
                order: None,
            }),
        };
        assert_eq!(overrides, &expected);
    }

    #[test]
    fn test_targeted_falls_back_to_ceiling_scope() {
        let store = OverrideStore::from_toml_str(SAMPLE).unwrap();

        let overrides = store.targeted(Some("desktop"), "a004_nomenclature").unwrap();
        assert!(matches!(
            overrides.get("General"),
            Some(MetadataOverride::Tab(tab)) if tab.order == Some(500)
        ));
    }

    #[test]
    fn test_targeted_unknown_scope_is_none() {
        let store = OverrideStore::from_toml_str(SAMPLE).unwrap();
        assert!(store.targeted(None, "a005_marketplace").is_none());
        assert!(OverrideStore::empty().targeted(None, "a004_nomenclature").is_none());
    }

    #[test]
    fn test_rejects_unknown_override_kind() {
        let broken = r#"
            [scope."a004_nomenclature"."General"]
            type = "widget"
        "#;
        assert!(OverrideStore::from_toml_str(broken).is_err());
    }
}
