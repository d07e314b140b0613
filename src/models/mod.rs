pub mod aggregation;
pub mod filter;
pub mod order;

pub use aggregation::*;
pub use filter::*;
pub use order::*;
