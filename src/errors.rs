//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("First name is required")]
    MissingFirstName,

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid Instagram handle: {0}")]
    InvalidInstagram(String),

    #[error("Invalid shift spec: {0}")]
    InvalidShift(String),

    #[error("Invalid list mode: {0}")]
    InvalidMode(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No contact found for '{0}'")]
    ContactNotFound(String),

    #[error("Multiple contacts match '{0}'; use the id instead")]
    AmbiguousContact(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
