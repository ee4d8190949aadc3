pub mod config;
pub mod query;

pub use query::{run_query, MatchArgs};
