// src/export/logic.rs

use crate::core::query::label_cmp;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::ContactExport;
use crate::export::writers::{export_csv, export_json};
use crate::store::log::rlog;
use crate::store::pool::StorePool;
use crate::store::slots;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::io;
use std::path::Path;

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the contact collection, sorted by first name.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    pub fn export(
        pool: &mut StorePool,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let mut contacts = slots::load_contacts(pool)?;

        if contacts.is_empty() {
            warning("No contacts to export.");
            return Ok(());
        }

        contacts.sort_by(|a, b| label_cmp(&a.first_name, &b.first_name));
        let rows: Vec<ContactExport> = contacts.iter().map(ContactExport::from_contact).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        rlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} contacts as {}", rows.len(), format.as_str()),
        )?;

        Ok(())
    }
}
