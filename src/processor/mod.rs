pub mod breakdown;
pub mod filter_pipeline;
pub mod grouping;
pub mod metrics;

pub use breakdown::*;
pub use filter_pipeline::*;
pub use grouping::*;
pub use metrics::*;
