use std::{fs, path::PathBuf};

use wizard_engine::Clipboard;

/// Clipboard stand-in for the terminal: the copied text ends up in a file.
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn copy_text(&mut self, text: &str) -> wizard_engine::Result<()> {
        fs::write(&self.path, text)?;
        log::info!("copied {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }
}
