//! Foundation types for termfolio.
//!
//! This crate contains the types shared by every termfolio crate: terminal
//! lines and views, locale selection, configuration, the error type, and the
//! observer list used to publish state snapshots to renderers.

pub mod config;
pub mod error;
pub mod line;
pub mod observer;
