//! ukconf: Dotconfig Overlay Engine
//!
//! Applies `NAME=VALUE` overrides to a Kconfig-style `.config` of a unikernel
//! project. Untouched lines round-trip byte-for-byte and the result is
//! committed atomically, so the build system never sees a partial file.

pub mod cli;
pub mod commit;
pub mod config;
pub mod diagnostics;
pub mod dotconfig;
pub mod engine;
pub mod error;
pub mod logging;
pub mod overlay;
pub mod overrides;
pub mod prompt;
pub mod source;
