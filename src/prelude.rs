//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate,
//! allowing for convenient glob imports:
//!
//! ```
//! use nci_config_wire::prelude::*;
//! ```

pub use crate::config::{Config, RecordIter};
pub use crate::error::Error;
pub use crate::options::ConfigOption;
pub use crate::types::name_of;
