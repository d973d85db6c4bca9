//! Test support utilities shared by the game-session crates.
//!
//! Provides the unified logging initialisation used by unit tests (through
//! `ctor` in the library) and by integration test binaries.

pub mod logging;
