pub mod basic_provider;
pub mod override_store;
pub mod pipeline;
pub mod provider;
pub mod requests;

pub use basic_provider::*;
pub use override_store::*;
pub use pipeline::*;
pub use provider::*;
pub use requests::*;
