//! Engine test support
//!
//! Shared logging bootstrap for the engine's unit and integration tests.

pub mod logging;
