//! New-folder and upload dialogs

use std::path::{Path, PathBuf};

use tracing::info;

use super::{log_call_failure, Controller, ControllerError};
use crate::api::{FileRecord, FolderRecord, StorageApi};
use crate::logic::errors::{CREATE_FOLDER_FAILED, FOLDER_NAME_REQUIRED, UPLOAD_FAILED};
use crate::session::call_with_refresh;

impl Controller {
    pub fn open_folder_dialog(&mut self) {
        self.model.ui.folder_dialog.open();
        self.model.ui.error = None;
    }

    /// Close the dialog, dropping the typed name and any error
    pub fn cancel_folder_dialog(&mut self) {
        self.model.ui.folder_dialog.close();
        self.model.ui.error = None;
    }

    pub async fn submit_folder_dialog(&mut self) -> Result<FolderRecord, ControllerError> {
        let name = self.model.ui.folder_dialog.input.clone();
        self.create_folder(&name).await
    }

    /// Create `name` (trimmed) inside the current folder.
    ///
    /// A 401 triggers one token refresh and one retry; see
    /// [`call_with_refresh`].
    pub async fn create_folder(&mut self, name: &str) -> Result<FolderRecord, ControllerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.fail(ControllerError::Validation(FOLDER_NAME_REQUIRED.to_string())));
        }
        if !self.session.is_authenticated() {
            return Err(self.fail(ControllerError::AuthRequired));
        }

        let parent_id = self
            .model
            .navigation
            .path
            .current_folder_id()
            .map(str::to_string);
        let previous_token = self.session.access_token.clone();

        let api = self.api.clone();
        let api: &dyn StorageApi = api.as_ref();
        let parent = parent_id.as_deref();
        let result = call_with_refresh(api, &mut self.session, |token| async move {
            api.create_folder(name, parent, &token).await
        })
        .await;

        self.persist_if_refreshed(previous_token.as_deref());

        match result {
            Ok(folder) => {
                info!(name = %folder.name, id = %folder.id, ?parent_id, "Folder created");
                self.model.ui.folder_dialog.close();
                self.model.ui.error = None;
                self.model.show_toast(format!("Created folder {}", folder.name));
                self.bump_refresh();
                Ok(folder)
            }
            Err(e) => {
                log_call_failure("Create folder", &e);
                Err(self.fail(ControllerError::from_auth_call(&e, CREATE_FOLDER_FAILED)))
            }
        }
    }

    pub fn open_upload_dialog(&mut self) {
        self.model.ui.upload_dialog.open();
        self.model.ui.error = None;
    }

    pub fn cancel_upload_dialog(&mut self) {
        self.model.ui.upload_dialog.close();
        self.model.ui.error = None;
    }

    pub async fn submit_upload_dialog(&mut self) -> Result<FileRecord, ControllerError> {
        let path = PathBuf::from(self.model.ui.upload_dialog.input.trim());
        self.upload_file(&path).await
    }

    /// Upload a local file into the current folder
    pub async fn upload_file(&mut self, path: &Path) -> Result<FileRecord, ControllerError> {
        if path.as_os_str().is_empty() {
            return Err(self.fail(ControllerError::Validation(
                "File path is required".to_string(),
            )));
        }
        let is_file = tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(self.fail(ControllerError::Validation(format!(
                "File not found: {}",
                path.display()
            ))));
        }
        if !self.session.is_authenticated() {
            return Err(self.fail(ControllerError::AuthRequired));
        }

        let parent_id = self
            .model
            .navigation
            .path
            .current_folder_id()
            .map(str::to_string);
        let previous_token = self.session.access_token.clone();

        let api = self.api.clone();
        let api: &dyn StorageApi = api.as_ref();
        let parent = parent_id.as_deref();
        let result = call_with_refresh(api, &mut self.session, |token| async move {
            api.upload_file(path, parent, &token).await
        })
        .await;

        self.persist_if_refreshed(previous_token.as_deref());

        match result {
            Ok(file) => {
                info!(name = %file.name, ?parent_id, "File uploaded");
                self.model.ui.upload_dialog.close();
                self.model.ui.error = None;
                self.model.show_toast(format!("Uploaded {}", file.name));
                self.bump_refresh();
                Ok(file)
            }
            Err(e) => {
                log_call_failure("Upload", &e);
                Err(self.fail(ControllerError::from_auth_call(&e, UPLOAD_FAILED)))
            }
        }
    }
}
