// src/upload.rs
//! Client-side checks on sales data files before they are sent for upload.

use std::path::{Path, PathBuf};

const ALLOWED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];
const ALLOWED_MIME_TYPES: [&str; 3] = [
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UploadRejected {
    #[error("Please select a CSV or Excel file")]
    UnsupportedType,
    #[error("Please select a file first")]
    NoFile,
    #[error("Cannot read {0}")]
    Unreadable(String),
}

/// A file that passed validation and is ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: &'static str,
    pub size_bytes: u64,
}

/// Accepts a file when either its MIME type or its extension is a spreadsheet.
pub fn validate(path: &Path, mime: Option<&str>, size_bytes: u64) -> Result<SelectedFile, UploadRejected> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(UploadRejected::UnsupportedType)?
        .to_string();

    let by_mime = mime.and_then(|m| ALLOWED_MIME_TYPES.iter().copied().find(|allowed| *allowed == m));
    let by_extension = mime_for_extension(&file_name);

    let mime = by_mime.or(by_extension).ok_or(UploadRejected::UnsupportedType)?;
    Ok(SelectedFile { path: path.to_path_buf(), file_name, mime, size_bytes })
}

fn mime_for_extension(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }
    Some(match ext.as_str() {
        "csv" => ALLOWED_MIME_TYPES[0],
        "xls" => ALLOWED_MIME_TYPES[1],
        _ => ALLOWED_MIME_TYPES[2],
    })
}
