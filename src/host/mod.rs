//! Host editor integration seams
//!
//! The core owns no UI. The host editor supplies these capabilities: read
//! the current selection, insert literal text at the cursor, persist an
//! opaque settings blob, and surface a short transient notice.

mod commands;
mod store;

pub use commands::{insert_citation, load_settings, query_for_command, save_settings, Command};
pub use store::FileSettingsStore;

use anyhow::Result;

/// Editing surface exposed by the host.
pub trait HostEditor {
    /// Currently selected text, if any.
    fn selected_text(&self) -> Option<String>;

    /// Insert literal text at the current cursor/selection.
    fn insert_at_cursor(&mut self, text: &str) -> Result<()>;

    /// Surface a short transient user-visible notice.
    fn notify(&self, message: &str);
}

/// Opaque settings persistence exposed by the host.
pub trait SettingsStore {
    /// Load the persisted blob; `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>>;

    /// Persist the blob, replacing any previous one.
    fn save(&self, blob: &str) -> Result<()>;
}
