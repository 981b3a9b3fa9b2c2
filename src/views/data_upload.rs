use std::path::Path;

use tracing::error;

use super::{ignore, Command, Outcome, View};
use crate::dtos::training::{TrainingResult, TrainingStatus, UploadResult};
use crate::upload::{self, SelectedFile, UploadRejected};

pub const UPLOAD_ERROR: &str = "Failed to upload file";
pub const TRAIN_ERROR: &str = "Failed to train model";

#[derive(Debug, Clone)]
pub struct DataUploadView {
    pub file: Option<SelectedFile>,
    pub uploading: bool,
    pub training: bool,
    pub upload_result: Option<UploadResult>,
    pub training_result: Option<TrainingResult>,
    pub training_status: Option<TrainingStatus>,
    pub selected_store: String,
}

impl DataUploadView {
    pub fn open() -> (Self, Vec<Command>) {
        let view = Self {
            file: None,
            uploading: false,
            training: false,
            upload_result: None,
            training_result: None,
            training_status: None,
            selected_store: "all".to_string(),
        };
        (view, vec![Command::LoadTrainingStatus])
    }

    /// Validates and stores a file choice. Rejected files leave the current
    /// selection untouched and never reach the network.
    pub fn select_file(&mut self, path: &Path, mime: Option<&str>, size_bytes: u64) -> Result<(), UploadRejected> {
        let file = upload::validate(path, mime, size_bytes)?;
        self.file = Some(file);
        self.upload_result = None;
        Ok(())
    }

    /// Selects a file from disk, taking its size from the filesystem.
    pub fn select_path(&mut self, path: &Path) -> Result<(), UploadRejected> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to read file metadata");
            UploadRejected::Unreadable(format!("{}: {e}", path.display()))
        })?;
        self.select_file(path, None, metadata.len())
    }

    pub fn upload(&mut self) -> Result<Vec<Command>, UploadRejected> {
        let file = self.file.clone().ok_or(UploadRejected::NoFile)?;
        self.uploading = true;
        self.upload_result = None;
        Ok(vec![Command::Upload(file)])
    }

    pub fn train(&mut self) -> Vec<Command> {
        self.training = true;
        self.training_result = None;
        vec![Command::Train { store: self.selected_store.clone() }]
    }

    /// Stores found in the last successful upload, offered as training targets.
    pub fn uploaded_stores(&self) -> &[String] {
        self.upload_result.as_ref().map(|r| r.stores.as_slice()).unwrap_or(&[])
    }
}

impl View for DataUploadView {
    fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::Upload(result) => {
                self.uploading = false;
                let result = result.unwrap_or_else(|e| {
                    error!(error = %e, "Upload failed");
                    UploadResult::failed(UPLOAD_ERROR)
                });
                if result.success {
                    self.file = None;
                }
                self.upload_result = Some(result);
            }
            Outcome::Training(result) => {
                self.training = false;
                let result = result.unwrap_or_else(|e| {
                    error!(error = %e, "Training failed");
                    TrainingResult::failed(TRAIN_ERROR)
                });
                let succeeded = result.success;
                self.training_result = Some(result);
                if succeeded {
                    return vec![Command::LoadTrainingStatus];
                }
            }
            Outcome::TrainingStatus(Ok(status)) => self.training_status = Some(status),
            Outcome::TrainingStatus(Err(e)) => error!(error = %e, "Failed to load training status"),
            other => ignore("data_upload", &other),
        }
        Vec::new()
    }
}
