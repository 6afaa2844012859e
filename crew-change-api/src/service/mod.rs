pub mod change_request_service;

pub use change_request_service::*;
