pub mod domain;
pub mod service;
pub mod tracking;
pub mod error;

pub use error::*;
pub use domain::*;
pub use service::*;
pub use tracking::*;
