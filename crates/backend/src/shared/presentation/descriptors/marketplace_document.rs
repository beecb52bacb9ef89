//! Shared admin presentation for marketplace documents
//!
//! Posting entities that do not need a layout of their own register as
//! subtypes of `marketplace_document` and inherit this screen.

use contracts::shared::presentation::{ClassPresentation, GroupPresentation, TabPresentation};

pub static MARKETPLACE_DOCUMENT_PRESENTATION: ClassPresentation = ClassPresentation {
    friendly_name: "Marketplace document",
    tabs: &[
        TabPresentation {
            name: "General",
            order: 1000,
            groups: &[
                GroupPresentation {
                    name: "document_header",
                    order: 1000,
                    column: 0,
                    untitled: true,
                    collapsed: false,
                    tooltip: None,
                },
                GroupPresentation {
                    name: "document_lines",
                    order: 2000,
                    column: 0,
                    untitled: false,
                    collapsed: false,
                    tooltip: None,
                },
            ],
        },
        TabPresentation {
            name: "Posting",
            order: 2000,
            groups: &[GroupPresentation {
                name: "posting_state",
                order: 1000,
                column: 0,
                untitled: false,
                collapsed: true,
                tooltip: Some("State reported by the marketplace"),
            }],
        },
    ],
    tab_overrides: &[],
    group_overrides: &[],
};
