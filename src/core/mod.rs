//! Core Module - Scoring Logic
//!
//! Question set and weighted percentage scoring.

pub mod scorer;

pub use scorer::*;
