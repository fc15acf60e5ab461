//! # ol-config
//!
//! Runtime settings for onleave-rs: where the calendar and holiday seed
//! data lives.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to the embedding application.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ol_calendar::CalendarService;
//! use ol_config::Settings;
//!
//! let settings = Settings::load()?;
//! let service = CalendarService::from_store(settings.store.open_store()?);
//! # Ok::<(), ol_config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{Settings, StoreConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ConfigError, Settings, StoreConfig};
}
