//! AuthRelay shared infrastructure.
//!
//! Currently hosts the structured logging setup used by every AuthRelay
//! binary. Domain code lives in `ar-core`.

pub mod logging;
