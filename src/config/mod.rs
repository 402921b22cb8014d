//! Configuration module for WhisperLink
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WhisperPaths;
pub use settings::Settings;
