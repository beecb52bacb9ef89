//! Admin presentation for Ozon FBO postings
//!
//! FBO postings carry warehouse supply details the shared marketplace
//! document screen has no place for, so they keep a layout of their own.

use contracts::shared::presentation::{ClassPresentation, GroupPresentation, TabPresentation};

pub static OZON_FBO_POSTING_PRESENTATION: ClassPresentation = ClassPresentation {
    friendly_name: "Ozon FBO posting",
    tabs: &[
        TabPresentation {
            name: "General",
            order: 1000,
            groups: &[
                GroupPresentation {
                    name: "fbo_header",
                    order: 1000,
                    column: 0,
                    untitled: true,
                    collapsed: false,
                    tooltip: None,
                },
                GroupPresentation {
                    name: "fbo_lines",
                    order: 2000,
                    column: 0,
                    untitled: false,
                    collapsed: false,
                    tooltip: None,
                },
            ],
        },
        TabPresentation {
            name: "Supply",
            order: 2000,
            groups: &[GroupPresentation {
                name: "fbo_supply",
                order: 1000,
                column: 0,
                untitled: false,
                collapsed: false,
                tooltip: Some("Supply the posting was shipped from"),
            }],
        },
    ],
    tab_overrides: &[],
    group_overrides: &[],
};
