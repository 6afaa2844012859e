pub mod config;
pub mod factory;
pub mod repository;
pub mod service;

pub use config::{ConfigError, PostgresConfig};
pub use factory::ChangeStoreFactory;
pub use repository::memory::MemoryChangeRequestRepositoryImpl;
#[cfg(feature = "postgres")]
pub use repository::postgres::PgChangeRequestRepositoryImpl;
pub use service::ChangeRequestServiceImpl;

#[cfg(all(test, feature = "postgres"))]
pub mod test_helper;
