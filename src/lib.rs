//! Task ledger library - in-memory task collection with keyword priority
//! heuristics and greedy time-budget allocation.
//!
//! The consuming UI layer supplies raw input and renders output; this crate
//! owns the collection, its ordering, and its export formats.

pub mod export;
pub mod ledger;
