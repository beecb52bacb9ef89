//! Deployment override declarations for presentation metadata
//!
//! Override files let an installation patch tab/group layouts without
//! touching descriptor code. Entries are sparse: only the attributes a
//! patch sets are applied, everything else keeps its current value.

use serde::{Deserialize, Serialize};

/// Sparse patch of tab attributes, addressed by tab name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl TabOverride {
    /// Display name for a tab created from this override: the explicit
    /// name when present and non-empty, otherwise the addressed key.
    pub fn resolved_name(&self, key: &str) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => key.to_string(),
        }
    }
}

/// Sparse patch of group attributes, addressed by a `<tab>-@-<group>` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untitled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl GroupOverride {
    /// Display name for a group created from this override: the explicit
    /// name when present and non-empty, otherwise the group part of the key.
    pub fn resolved_name(&self, key: &str) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => key.to_string(),
        }
    }
}

/// Field-level patch. The tab/group provider recognizes and skips these so
/// layout and field patches can share one override file; field providers
/// consume them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<bool>,
}

/// One entry of a deployment override file, tagged by target kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MetadataOverride {
    Tab(TabOverride),
    Group(GroupOverride),
    Field(FieldOverride),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_override_parses_sparse_entry() {
        let parsed: MetadataOverride = serde_json::from_value(serde_json::json!({
            "type": "group",
            "tooltip": "Shipping settings",
        }))
        .unwrap();

        match parsed {
            MetadataOverride::Group(group) => {
                assert_eq!(group.tooltip.as_deref(), Some("Shipping settings"));
                assert!(group.name.is_none());
                assert!(group.order.is_none());
            }
            other => panic!("expected group override, got {other:?}"),
        }
    }

    #[test]
    fn test_field_override_uses_camel_case_names() {
        let parsed: MetadataOverride = serde_json::from_value(serde_json::json!({
            "type": "field",
            "friendlyName": "SKU",
            "excluded": false,
        }))
        .unwrap();

        match parsed {
            MetadataOverride::Field(field) => {
                assert_eq!(field.friendly_name.as_deref(), Some("SKU"));
                assert_eq!(field.excluded, Some(false));
            }
            other => panic!("expected field override, got {other:?}"),
        }
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let entry = MetadataOverride::Tab(TabOverride {
            name: Some("Renamed".to_string()),
            order: None,
        });
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "tab");
        assert_eq!(value["name"], "Renamed");
    }

    #[test]
    fn test_resolved_name_prefers_non_empty_override() {
        let named = TabOverride {
            name: Some("Renamed".to_string()),
            order: None,
        };
        let empty = TabOverride {
            name: Some(String::new()),
            order: None,
        };
        let unset = TabOverride::default();

        assert_eq!(named.resolved_name("Tab1"), "Renamed");
        assert_eq!(empty.resolved_name("Tab1"), "Tab1");
        assert_eq!(unset.resolved_name("Tab1"), "Tab1");
    }
}
