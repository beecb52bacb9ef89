//! Resolved tab and group metadata produced by the backend metadata pipeline
//!
//! These are the mutable working DTOs the pipeline builds up and the UI
//! consumes. Unset attributes stay `None` and are omitted from the wire
//! format, so a sparse override never fabricates values it did not set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Outcome of a single provider invocation inside the metadata pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderResponse {
    /// The provider recognized the entity and contributed to the map.
    Handled,
    /// The provider had nothing to contribute for this entity.
    NotHandled,
}

/// A tab of an entity editing screen.
///
/// Tabs live in the resolved map under the name they were declared with.
/// A later rename changes only the `name` attribute, never the map key, so
/// overrides registered against the original name keep finding their target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owning_class: Option<String>,
    #[serde(default)]
    pub groups: HashMap<String, GroupMetadata>,
}

impl TabMetadata {
    /// Empty tab carrying only a display name, as created by a deployment
    /// override that targets a tab no descriptor declared.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            order: None,
            owning_class: None,
            groups: HashMap::new(),
        }
    }

    /// Groups of this tab in display order: by `order`, unordered last,
    /// ties broken by name.
    pub fn sorted_groups(&self) -> Vec<&GroupMetadata> {
        let mut groups: Vec<&GroupMetadata> = self.groups.values().collect();
        groups.sort_by(|a, b| {
            (a.order.unwrap_or(i32::MAX), a.name.as_str())
                .cmp(&(b.order.unwrap_or(i32::MAX), b.name.as_str()))
        });
        groups
    }
}

/// A field group inside a tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMetadata {
    pub name: String,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owning_class: Option<String>,
}

impl GroupMetadata {
    /// Empty group carrying only a display name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            order: None,
            column: None,
            untitled: None,
            collapsed: None,
            tooltip: None,
            owning_class: None,
        }
    }
}

/// Tabs of a resolved metadata map in display order: by `order`, unordered
/// last, ties broken by name.
pub fn sorted_tabs(metadata: &HashMap<String, TabMetadata>) -> Vec<&TabMetadata> {
    let mut tabs: Vec<&TabMetadata> = metadata.values().collect();
    tabs.sort_by(|a, b| {
        (a.order.unwrap_or(i32::MAX), a.name.as_str())
            .cmp(&(b.order.unwrap_or(i32::MAX), b.name.as_str()))
    });
    tabs
}
