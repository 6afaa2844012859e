#[allow(clippy::module_inception)]
pub mod change_request;

pub use change_request::*;
