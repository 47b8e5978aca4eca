//! Virtualized hex/ASCII viewer engine.
//!
//! The [`viewer`] module holds the store, the per-concern reducers and the
//! render reconciliation; [`hex`] and [`geometry`] are the pure codec and
//! scroll arithmetic they build on.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod geometry;
pub mod hex;
pub mod logging;
pub mod viewer;
