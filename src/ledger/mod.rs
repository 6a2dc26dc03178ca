//! In-memory task ledger
//!
//! This module provides the ordered task collection and its operations:
//! - Priority classification from description keywords
//! - Stable priority ordering and greedy time-budget allocation
//! - Dense 1-based sequence numbers maintained across removals

pub mod error;
pub mod model;
pub mod store;
pub mod time;

pub use error::{LedgerError, Result};
pub use model::{Priority, Task};
pub use store::Ledger;
pub use time::convert_to_minutes;
