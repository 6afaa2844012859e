pub mod change_request_repository;
pub mod db_init;
pub mod utils;

pub use change_request_repository::PgChangeRequestRepositoryImpl;
