//! Admin presentation for the nomenclature reference

use contracts::shared::presentation::{ClassPresentation, GroupPresentation, TabPresentation};

pub mod tab_name {
    pub const GENERAL: &str = "General";
    pub const MARKETPLACE_LINKS: &str = "Marketplace Links";
}

pub mod tab_order {
    pub const GENERAL: i32 = 1000;
    pub const MARKETPLACE_LINKS: i32 = 2000;
}

pub mod group_name {
    pub const GENERAL: &str = "nomenclature_general";
    pub const DIMENSIONS: &str = "nomenclature_dimensions";
    pub const BARCODES: &str = "nomenclature_barcodes";
    pub const MARKETPLACE_CARDS: &str = "nomenclature_marketplace_cards";
}

pub mod group_order {
    pub const GENERAL: i32 = 1000;
    pub const DIMENSIONS: i32 = 2000;
    pub const BARCODES: i32 = 3000;
    pub const MARKETPLACE_CARDS: i32 = 1000;
}

pub static NOMENCLATURE_PRESENTATION: ClassPresentation = ClassPresentation {
    friendly_name: "Nomenclature",
    tabs: &[
        TabPresentation {
            name: tab_name::GENERAL,
            order: tab_order::GENERAL,
            groups: &[
                GroupPresentation {
                    name: group_name::GENERAL,
                    order: group_order::GENERAL,
                    column: 0,
                    untitled: true,
                    collapsed: false,
                    tooltip: None,
                },
                GroupPresentation {
                    name: group_name::DIMENSIONS,
                    order: group_order::DIMENSIONS,
                    column: 1,
                    untitled: false,
                    collapsed: false,
                    tooltip: Some("Weight and dimensions used by logistics"),
                },
                GroupPresentation {
                    name: group_name::BARCODES,
                    order: group_order::BARCODES,
                    column: 1,
                    untitled: false,
                    collapsed: true,
                    tooltip: None,
                },
            ],
        },
        TabPresentation {
            name: tab_name::MARKETPLACE_LINKS,
            order: tab_order::MARKETPLACE_LINKS,
            groups: &[GroupPresentation {
                name: group_name::MARKETPLACE_CARDS,
                order: group_order::MARKETPLACE_CARDS,
                column: 0,
                untitled: false,
                collapsed: false,
                tooltip: Some("Marketplace cards linked to this item"),
            }],
        },
    ],
    tab_overrides: &[],
    group_overrides: &[],
};
