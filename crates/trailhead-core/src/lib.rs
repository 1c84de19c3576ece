//! Trailhead Core Library
//!
//! All-paths graph search with interchangeable frontier strategies.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
