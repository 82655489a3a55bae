pub mod api;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod utils;
pub mod wallet;

pub use config::Config;
pub use error::{CheckerError, Result};
