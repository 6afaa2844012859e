pub mod change_log;
pub mod change_request;
pub mod field_diff;
pub mod payload;
pub mod principal;
pub mod snapshot;
pub mod target;

pub use change_log::*;
pub use change_request::*;
pub use field_diff::*;
pub use payload::*;
pub use principal::*;
pub use snapshot::*;
pub use target::*;
