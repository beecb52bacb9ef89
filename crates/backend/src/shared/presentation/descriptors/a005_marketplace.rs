//! Admin presentation for the marketplace reference

use contracts::shared::presentation::{ClassPresentation, GroupPresentation, TabPresentation};

pub static MARKETPLACE_PRESENTATION: ClassPresentation = ClassPresentation {
    friendly_name: "Marketplace",
    tabs: &[TabPresentation {
        name: "General",
        order: 1000,
        groups: &[
            GroupPresentation {
                name: "marketplace_general",
                order: 1000,
                column: 0,
                untitled: true,
                collapsed: false,
                tooltip: None,
            },
            GroupPresentation {
                name: "marketplace_api",
                order: 2000,
                column: 1,
                untitled: false,
                collapsed: true,
                tooltip: Some("Credentials used by the sync jobs"),
            },
        ],
    }],
    tab_overrides: &[],
    group_overrides: &[],
};
