pub mod descriptors;
pub mod registry;

pub use registry::*;
