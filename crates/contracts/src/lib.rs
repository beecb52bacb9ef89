//! Shared contracts between the backend engine and admin UI crates

pub mod shared;
