//! Stock provider for tab and group metadata
//!
//! Implements the three resolve phases for the basic screen layout: seed
//! the tabs and groups the descriptor declares, apply the descriptor's own
//! property overrides, then apply deployment overrides. Deployment
//! overrides may create tabs and groups no descriptor declared; declared
//! overrides never do, since a typo there is a programming error rather
//! than a deployment choice.

use std::collections::HashMap;

use contracts::shared::presentation::{
    GroupMetadata, GroupOverride, GroupPresentation, GroupPresentationOverride, GroupProperty,
    MetadataOverride, ProviderResponse, TabMetadata, TabOverride, TabPresentation,
    TabPresentationOverride, TabProperty,
};

use super::provider::{EntityMetadataProvider, ResolveError};
use super::requests::{AddMetadataRequest, ConfigOverrideRequest, DeclaredOverrideRequest};

/// Separator of the `<tab>-@-<group>` form used by group override keys.
pub const GROUP_KEY_SEPARATOR: &str = "-@-";

/// The stock tab/group provider. Stateless; one instance serves every
/// entity.
#[derive(Debug, Default)]
pub struct BasicMetadataProvider;

impl EntityMetadataProvider for BasicMetadataProvider {
    fn add_tab_and_group_metadata(
        &self,
        request: &AddMetadataRequest<'_>,
        metadata: &mut HashMap<String, TabMetadata>,
    ) -> Result<ProviderResponse, ResolveError> {
        let Some(descriptor) = request.registry.lookup(request.entity_index) else {
            return Ok(ProviderResponse::NotHandled);
        };
        for tab_decl in descriptor.tabs {
            let tab = build_tab_metadata(tab_decl, request.entity_index, metadata);
            metadata.insert(tab_decl.name.to_string(), tab);
        }
        Ok(ProviderResponse::Handled)
    }

    fn override_metadata_via_declaration(
        &self,
        request: &DeclaredOverrideRequest<'_>,
        metadata: &mut HashMap<String, TabMetadata>,
    ) -> Result<ProviderResponse, ResolveError> {
        let Some(descriptor) = request.registry.lookup(request.entity_index) else {
            return Ok(ProviderResponse::NotHandled);
        };
        for tab_override in descriptor.tab_overrides {
            if let Some(tab) = metadata.get_mut(tab_override.tab_name) {
                apply_declared_tab_override(tab, tab_override)?;
            }
        }
        for group_override in descriptor.group_overrides {
            if let Some(group) = find_group_mut(group_override.group_name, metadata) {
                apply_declared_group_override(group, group_override)?;
            }
        }
        Ok(ProviderResponse::Handled)
    }

    fn override_metadata_via_config(
        &self,
        request: &ConfigOverrideRequest<'_>,
        metadata: &mut HashMap<String, TabMetadata>,
    ) -> Result<ProviderResponse, ResolveError> {
        let Some(overrides) = request
            .store
            .targeted(request.config_key, request.ceiling_entity)
        else {
            return Ok(ProviderResponse::Handled);
        };
        // Apply in key order so runs are reproducible regardless of how
        // the file was written.
        let mut entries: Vec<(&String, &MetadataOverride)> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (key, entry) in entries {
            match entry {
                MetadataOverride::Tab(tab_override) => {
                    apply_config_tab_override(key, tab_override, metadata);
                }
                MetadataOverride::Group(group_override) => {
                    apply_config_group_override(key, group_override, metadata)?;
                }
                MetadataOverride::Field(_) => {
                    // Field patches ride in the same file; field providers
                    // own them.
                }
            }
        }
        Ok(ProviderResponse::Handled)
    }
}

/// Builds or extends the metadata for one declared tab.
///
/// An already-present tab keeps its attributes; only groups it does not
/// have yet are added. A group name already used anywhere on the screen is
/// skipped, so the first declaration of a group wins.
fn build_tab_metadata(
    tab_decl: &TabPresentation,
    owning_class: &str,
    metadata: &mut HashMap<String, TabMetadata>,
) -> TabMetadata {
    let mut tab = match metadata.remove(tab_decl.name) {
        Some(existing) => existing,
        None => TabMetadata {
            name: tab_decl.name.to_string(),
            order: Some(tab_decl.order),
            owning_class: Some(owning_class.to_string()),
            groups: HashMap::new(),
        },
    };
    for group_decl in tab_decl.groups {
        if tab.groups.contains_key(group_decl.name) {
            continue;
        }
        if find_group(group_decl.name, metadata).is_some() {
            tracing::warn!(
                "Group '{}' of tab '{}' is already declared under another tab; keeping the first declaration",
                group_decl.name,
                tab_decl.name
            );
            continue;
        }
        tab.groups.insert(
            group_decl.name.to_string(),
            build_group_metadata(group_decl, owning_class),
        );
    }
    tab
}

fn build_group_metadata(group_decl: &GroupPresentation, owning_class: &str) -> GroupMetadata {
    GroupMetadata {
        name: group_decl.name.to_string(),
        order: Some(group_decl.order),
        column: Some(group_decl.column),
        untitled: Some(group_decl.untitled),
        collapsed: Some(group_decl.collapsed),
        tooltip: group_decl.tooltip.map(str::to_string),
        owning_class: Some(owning_class.to_string()),
    }
}

/// Group names address groups globally within one screen, so lookup spans
/// every tab.
fn find_group<'a>(
    group_name: &str,
    metadata: &'a HashMap<String, TabMetadata>,
) -> Option<&'a GroupMetadata> {
    metadata
        .values()
        .find_map(|tab| tab.groups.get(group_name))
}

fn find_group_mut<'a>(
    group_name: &str,
    metadata: &'a mut HashMap<String, TabMetadata>,
) -> Option<&'a mut GroupMetadata> {
    metadata
        .values_mut()
        .find_map(|tab| tab.groups.get_mut(group_name))
}

fn apply_declared_tab_override(
    tab: &mut TabMetadata,
    tab_override: &TabPresentationOverride,
) -> Result<(), ResolveError> {
    match tab_override.property {
        TabProperty::Name => tab.name = tab_override.value.to_string(),
        TabProperty::Order => {
            tab.order = Some(parse_i32(
                tab_override.tab_name,
                tab_override.property.as_str(),
                tab_override.value,
            )?);
        }
    }
    Ok(())
}

fn apply_declared_group_override(
    group: &mut GroupMetadata,
    group_override: &GroupPresentationOverride,
) -> Result<(), ResolveError> {
    let target = group_override.group_name;
    let property = group_override.property.as_str();
    let value = group_override.value;
    match group_override.property {
        GroupProperty::Name => group.name = value.to_string(),
        GroupProperty::Order => group.order = Some(parse_i32(target, property, value)?),
        GroupProperty::Column => group.column = Some(parse_i32(target, property, value)?),
        GroupProperty::Untitled => group.untitled = Some(parse_bool(target, property, value)?),
        GroupProperty::Collapsed => group.collapsed = Some(parse_bool(target, property, value)?),
        GroupProperty::Tooltip => group.tooltip = Some(value.to_string()),
    }
    Ok(())
}

/// Patches an existing tab in place, or creates one when the key addresses
/// a tab nothing declared. A rename never touches the map key.
fn apply_config_tab_override(
    key: &str,
    tab_override: &TabOverride,
    metadata: &mut HashMap<String, TabMetadata>,
) {
    if let Some(tab) = metadata.get_mut(key) {
        if let Some(name) = &tab_override.name {
            tab.name = name.clone();
        }
        if let Some(order) = tab_override.order {
            tab.order = Some(order);
        }
    } else {
        let name = tab_override.resolved_name(key);
        let mut tab = TabMetadata::new(&name);
        tab.order = tab_override.order;
        metadata.insert(name, tab);
    }
}

/// Patches the addressed group wherever it lives, or creates it (and the
/// named tab, when absent) from the override alone. Created entries carry
/// only what the override set; in particular no `owningClass`.
fn apply_config_group_override(
    key: &str,
    group_override: &GroupOverride,
    metadata: &mut HashMap<String, TabMetadata>,
) -> Result<(), ResolveError> {
    let (tab_name, group_name) = split_group_key(key)?;
    if let Some(group) = find_group_mut(group_name, metadata) {
        if let Some(name) = &group_override.name {
            group.name = name.clone();
        }
        if let Some(order) = group_override.order {
            group.order = Some(order);
        }
        if let Some(untitled) = group_override.untitled {
            group.untitled = Some(untitled);
        }
        if let Some(column) = group_override.column {
            group.column = Some(column);
        }
        if let Some(collapsed) = group_override.collapsed {
            group.collapsed = Some(collapsed);
        }
        if let Some(tooltip) = &group_override.tooltip {
            group.tooltip = Some(tooltip.clone());
        }
        return Ok(());
    }

    let name = group_override.resolved_name(group_name);
    let mut group = GroupMetadata::new(&name);
    group.order = group_override.order;
    group.column = group_override.column;
    group.untitled = group_override.untitled;
    group.collapsed = group_override.collapsed;
    group.tooltip = group_override.tooltip.clone();
    let tab = metadata
        .entry(tab_name.to_string())
        .or_insert_with(|| TabMetadata::new(tab_name));
    tab.groups.insert(name, group);
    Ok(())
}

fn split_group_key(key: &str) -> Result<(&str, &str), ResolveError> {
    let mut parts = key.split(GROUP_KEY_SEPARATOR);
    match (parts.next(), parts.next()) {
        (Some(tab_name), Some(group_name)) if !tab_name.is_empty() && !group_name.is_empty() => {
            Ok((tab_name, group_name))
        }
        _ => Err(ResolveError::MalformedGroupKey(key.to_string())),
    }
}

fn parse_i32(target: &str, property: &'static str, value: &str) -> Result<i32, ResolveError> {
    value
        .parse()
        .map_err(|err: std::num::ParseIntError| ResolveError::InvalidOverrideValue {
            target: target.to_string(),
            property,
            value: value.to_string(),
            reason: err.to_string(),
        })
}

fn parse_bool(target: &str, property: &'static str, value: &str) -> Result<bool, ResolveError> {
    value
        .parse()
        .map_err(|err: std::str::ParseBoolError| ResolveError::InvalidOverrideValue {
            target: target.to_string(),
            property,
            value: value.to_string(),
            reason: err.to_string(),
        })
}
