pub mod change_log;

pub use change_log::*;
