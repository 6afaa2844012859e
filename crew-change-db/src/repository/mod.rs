pub mod change_request_repository;
pub mod create;
pub mod find_by_category;
pub mod list_all;
pub mod load;
pub mod load_audits;
pub mod load_batch;
pub mod update;

// Re-exports
pub use change_request_repository::*;
pub use create::*;
pub use find_by_category::*;
pub use list_all::*;
pub use load::*;
pub use load_audits::*;
pub use load_batch::*;
pub use update::*;
