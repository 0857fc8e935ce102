// View-model types, display formatters and document loading for CareerLens.

pub mod formatters;
pub mod loader;
pub mod types;
