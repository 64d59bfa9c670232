//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, dialogs, inline error and toast.

use std::time::Instant;

use super::types::{LoginForm, TextPrompt};
use crate::{DisplayMode, SortMode};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Current sort mode
    pub sort_mode: SortMode,

    /// Whether sort is reversed
    pub sort_reverse: bool,

    /// Display mode for file info
    pub display_mode: DisplayMode,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // DIALOGS & INPUT
    // ============================================
    /// New folder dialog (folder name input)
    pub folder_dialog: TextPrompt,

    /// Upload dialog (local file path input)
    pub upload_dialog: TextPrompt,

    /// Login form
    pub login: LoginForm,

    /// Whether the search box is receiving keystrokes
    pub search_mode: bool,

    // ============================================
    // MESSAGES
    // ============================================
    /// Inline error shown under the breadcrumb / in the open dialog
    pub error: Option<String>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            sort_mode: SortMode::Alphabetical,
            sort_reverse: false,
            display_mode: DisplayMode::TimestampAndSize,
            vim_mode,
            folder_dialog: TextPrompt::default(),
            upload_dialog: TextPrompt::default(),
            login: LoginForm::default(),
            search_mode: false,
            error: None,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.folder_dialog.open || self.upload_dialog.open
    }

    pub fn close_all_modals(&mut self) {
        self.folder_dialog.close();
        self.upload_dialog.close();
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .is_some_and(|(_, ts)| crate::logic::ui::should_dismiss_toast(ts.elapsed().as_millis()))
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
