//! Admin presentation for marketplace product cards
//!
//! The base layout is shared with the import tooling; the declared
//! overrides below carry the admin-console adjustments on top of it.

use contracts::shared::presentation::{
    ClassPresentation, GroupPresentation, GroupPresentationOverride, GroupProperty,
    TabPresentation, TabPresentationOverride, TabProperty,
};

pub mod tab_name {
    pub const GENERAL: &str = "General";
    pub const CONTENT: &str = "Content";
}

pub mod tab_order {
    pub const GENERAL: i32 = 1000;
    pub const CONTENT: i32 = 2000;
}

pub mod group_name {
    pub const CARD: &str = "product_card";
    pub const PRICING: &str = "product_pricing";
    pub const CONTENT: &str = "product_content";
    pub const MEDIA: &str = "product_media";
}

pub mod group_order {
    pub const CARD: i32 = 1000;
    pub const PRICING: i32 = 2000;
    pub const CONTENT: i32 = 1000;
    pub const MEDIA: i32 = 2000;
}

pub static MARKETPLACE_PRODUCT_PRESENTATION: ClassPresentation = ClassPresentation {
    friendly_name: "Marketplace product",
    tabs: &[
        TabPresentation {
            name: tab_name::GENERAL,
            order: tab_order::GENERAL,
            groups: &[
                GroupPresentation {
                    name: group_name::CARD,
                    order: group_order::CARD,
                    column: 0,
                    untitled: true,
                    collapsed: false,
                    tooltip: None,
                },
                GroupPresentation {
                    name: group_name::PRICING,
                    order: group_order::PRICING,
                    column: 1,
                    untitled: false,
                    collapsed: false,
                    tooltip: None,
                },
            ],
        },
        TabPresentation {
            name: tab_name::CONTENT,
            order: tab_order::CONTENT,
            groups: &[
                GroupPresentation {
                    name: group_name::CONTENT,
                    order: group_order::CONTENT,
                    column: 0,
                    untitled: false,
                    collapsed: false,
                    tooltip: None,
                },
                GroupPresentation {
                    name: group_name::MEDIA,
                    order: group_order::MEDIA,
                    column: 1,
                    untitled: false,
                    collapsed: false,
                    tooltip: None,
                },
            ],
        },
    ],
    tab_overrides: &[TabPresentationOverride {
        tab_name: tab_name::CONTENT,
        property: TabProperty::Order,
        value: "1500",
    }],
    group_overrides: &[
        GroupPresentationOverride {
            group_name: group_name::PRICING,
            property: GroupProperty::Tooltip,
            value: "Final prices include marketplace commission",
        },
        GroupPresentationOverride {
            group_name: group_name::MEDIA,
            property: GroupProperty::Collapsed,
            value: "true",
        },
    ],
};
