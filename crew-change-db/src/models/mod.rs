pub mod auditable;
pub mod identifiable;
pub mod audit;
pub mod change_request;

// Re-exports
pub use auditable::*;
pub use identifiable::*;
pub use audit::*;
pub use change_request::*;
