pub mod assembler;
pub mod binding;
pub mod canonical;
pub mod controller;
pub mod diff_store;
pub mod navigation;
pub mod scope;
pub mod submit;

pub use assembler::*;
pub use binding::*;
pub use canonical::*;
pub use controller::*;
pub use diff_store::*;
pub use navigation::*;
pub use scope::*;
pub use submit::*;
