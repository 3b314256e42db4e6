//! Async client for The Blue Alliance v2 REST API
//!
//! Each operation resolves caller options over its group's defaults, builds
//! the resource URL and issues a single GET. The raw response comes back
//! untouched; parsing is left to the caller.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tba_wrapper::{Config, OptionsRecord, TbaClient};
//! use tba_wrapper::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = TbaClient::new(&Config::default())?;
//!
//!     let response = client
//!         .get_district_rankings(&OptionsRecord::new().with("district_short", "ne").with("year", 2014))
//!         .await?;
//!
//!     println!("{} {}", response.status, response.body);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod options;

// Re-export commonly used types for convenience
pub use api::{RawResponse, TbaClient};
pub use config::Config;
pub use endpoints::{Endpoint, Group};
pub use error::AppError;
pub use options::{OptionValue, OptionsRecord, resolve};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
