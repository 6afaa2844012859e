pub mod change_request_service_impl;

pub use change_request_service_impl::ChangeRequestServiceImpl;
