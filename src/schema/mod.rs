pub mod catalog;
pub mod registry;

pub use registry::*;
