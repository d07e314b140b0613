pub mod format;
pub mod options;
pub mod session;
pub mod snapshot;

pub use format::*;
pub use options::*;
pub use session::*;
pub use snapshot::*;
