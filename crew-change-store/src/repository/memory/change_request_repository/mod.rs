pub mod repo_impl;
pub mod create;
pub mod update;
pub mod load_batch;
pub mod list_all;
pub mod find_by_category;
pub mod load_audits;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::MemoryChangeRequestRepositoryImpl;
