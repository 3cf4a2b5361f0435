//! Passage Core — configuration and error types shared across the workspace.

pub mod config;
pub mod error;

pub use config::{CorpusPaths, PassageConfig};
pub use error::{Error, Result};
