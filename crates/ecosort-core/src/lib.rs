pub mod config;
pub mod error;
pub mod types;

pub use config::EcosortConfig;
pub use error::{EcosortError, Result};
pub use types::*;
