mod loader;
mod types;
mod validate;


pub use loader::load_suite;
pub use types::{HttpMethod, TestSpec};
pub use validate::{DispatchMode, validate};
