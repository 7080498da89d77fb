mod client;
mod executor;

pub use client::build_client;
pub use executor::{AttemptPlan, execute_attempt};
