pub mod change_request_repository;
pub mod database;

pub use change_request_repository::MemoryChangeRequestRepositoryImpl;
pub use database::MemoryDatabase;
