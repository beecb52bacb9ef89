//! Compile-time presentation descriptors for admin entities
//!
//! A descriptor is a plain `'static` table declared next to the entity it
//! describes. The backend registry maps entity indexes to descriptors and
//! the metadata pipeline turns them into editable [`super::TabMetadata`]
//! maps, so the whole screen layout stays in version-controlled code.

use std::collections::HashMap;

/// Tab property a declared override may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabProperty {
    Name,
    Order,
}

impl TabProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabProperty::Name => "name",
            TabProperty::Order => "order",
        }
    }
}

/// Group property a declared override may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupProperty {
    Name,
    Order,
    Column,
    Untitled,
    Collapsed,
    Tooltip,
}

impl GroupProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupProperty::Name => "name",
            GroupProperty::Order => "order",
            GroupProperty::Column => "column",
            GroupProperty::Untitled => "untitled",
            GroupProperty::Collapsed => "collapsed",
            GroupProperty::Tooltip => "tooltip",
        }
    }
}

/// Group declaration inside a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPresentation {
    pub name: &'static str,
    pub order: i32,
    pub column: i32,
    pub untitled: bool,
    pub collapsed: bool,
    pub tooltip: Option<&'static str>,
}

/// Tab declaration with its initial group layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabPresentation {
    pub name: &'static str,
    pub order: i32,
    pub groups: &'static [GroupPresentation],
}

/// Declared override of a single tab property.
///
/// Values are kept as strings in the table and parsed per property when
/// applied, so one override type covers names and orders alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabPresentationOverride {
    pub tab_name: &'static str,
    pub property: TabProperty,
    pub value: &'static str,
}

/// Declared override of a single group property. Groups are addressed by
/// name alone; group names are unique across the tabs of one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPresentationOverride {
    pub group_name: &'static str,
    pub property: GroupProperty,
    pub value: &'static str,
}

/// Class-level presentation descriptor: the full tab/group layout of one
/// entity editing screen plus its declared property overrides.
#[derive(Debug, Clone, Copy)]
pub struct ClassPresentation {
    pub friendly_name: &'static str,
    pub tabs: &'static [TabPresentation],
    pub tab_overrides: &'static [TabPresentationOverride],
    pub group_overrides: &'static [GroupPresentationOverride],
}

impl ClassPresentation {
    /// Checks that no group name is claimed by two different tabs of this
    /// descriptor.
    ///
    /// Override entries address groups globally within one screen, so a
    /// cross-tab duplicate would make the target ambiguous. Redeclaring a
    /// group under the same tab name stays legal; that is how layered tab
    /// declarations extend an existing group.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for tab in self.tabs {
            for group in tab.groups {
                match seen.get(group.name).copied() {
                    Some(previous_tab) if previous_tab != tab.name => {
                        return Err(format!(
                            "group '{}' is declared in both tab '{}' and tab '{}'",
                            group.name, previous_tab, tab.name
                        ));
                    }
                    _ => {
                        seen.insert(group.name, tab.name);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERAL_GROUP: GroupPresentation = GroupPresentation {
        name: "general",
        order: 1000,
        column: 0,
        untitled: true,
        collapsed: false,
        tooltip: None,
    };

    #[test]
    fn test_validate_accepts_unique_group_names() {
        let descriptor = ClassPresentation {
            friendly_name: "Test",
            tabs: &[
                TabPresentation {
                    name: "General",
                    order: 1000,
                    groups: &[GENERAL_GROUP],
                },
                TabPresentation {
                    name: "Advanced",
                    order: 2000,
                    groups: &[GroupPresentation {
                        name: "advanced",
                        order: 1000,
                        column: 0,
                        untitled: false,
                        collapsed: true,
                        tooltip: None,
                    }],
                },
            ],
            tab_overrides: &[],
            group_overrides: &[],
        };
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn test_validate_allows_redeclaring_a_group_in_the_same_tab() {
        let descriptor = ClassPresentation {
            friendly_name: "Test",
            tabs: &[
                TabPresentation {
                    name: "General",
                    order: 1000,
                    groups: &[GENERAL_GROUP],
                },
                TabPresentation {
                    name: "General",
                    order: 1000,
                    groups: &[GENERAL_GROUP],
                },
            ],
            tab_overrides: &[],
            group_overrides: &[],
        };
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_group_names_across_tabs() {
        let descriptor = ClassPresentation {
            friendly_name: "Test",
            tabs: &[
                TabPresentation {
                    name: "General",
                    order: 1000,
                    groups: &[GENERAL_GROUP],
                },
                TabPresentation {
                    name: "Advanced",
                    order: 2000,
                    groups: &[GENERAL_GROUP],
                },
            ],
            tab_overrides: &[],
            group_overrides: &[],
        };

        let err = descriptor.validate().unwrap_err();
        assert!(err.contains("general"));
        assert!(err.contains("Advanced"));
    }

    #[test]
    fn test_property_names() {
        assert_eq!(TabProperty::Order.as_str(), "order");
        assert_eq!(GroupProperty::Untitled.as_str(), "untitled");
    }
}
