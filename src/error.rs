//! Error types for Armory operations.
//!
//! This module defines [`ArmoryError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ArmoryError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ArmoryError::Other`) for unexpected errors
//! - Per-unit install failures are *not* errors: they are recorded as typed
//!   outcomes in an [`InstallReport`](crate::installer::InstallReport) and the
//!   session keeps going

use thiserror::Error;

/// Core error type for Armory operations.
#[derive(Debug, Error)]
pub enum ArmoryError {
    /// Referenced profile does not exist in the catalog.
    #[error("Unknown profile: {name}")]
    UnknownProfile { name: String },

    /// A profile names a unit that does not exist in its category.
    /// This is a configuration error, not a runtime one.
    #[error("Profile '{profile}' references unknown {category} tool '{name}'")]
    UnknownTool {
        profile: String,
        category: String,
        name: String,
    },

    /// A relied-on external tool is absent from PATH.
    #[error("Required tool not found: {tool}. {hint}")]
    MissingPrerequisite { tool: String, hint: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Armory operations.
pub type Result<T> = std::result::Result<T, ArmoryError>;
