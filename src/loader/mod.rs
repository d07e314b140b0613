pub mod cache;
pub mod column_normalizer;
pub mod csv_loader;
pub mod error;

pub use cache::*;
pub use column_normalizer::*;
pub use csv_loader::*;
pub use error::*;
