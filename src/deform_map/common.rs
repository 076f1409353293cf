//! Common utilities module
//!
//! This module contains shared utilities used across the deformation map painter.

pub mod error;

pub use error::{PainterError, Result};
