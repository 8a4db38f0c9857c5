//! sortvis - watch classic sorting algorithms work, one comparison at a time
//!
//! Library crate exposing the components used by the binary: the array being
//! sorted, the step-wise sorting engine, the drawing surface and the TUI.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod array;
pub mod canvas;
pub mod config;
pub mod error;
pub mod logging;
pub mod sort;

pub mod ui;

pub use error::{Error, Result};
