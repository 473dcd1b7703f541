use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::app::ports::TextSinkPort;
use crate::error::Result;

/// Plain UTF-8 text file, overwritten on each write
pub struct TextFileWriter {
    path: PathBuf,
}

impl TextFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSinkPort for TextFileWriter {
    fn write_text(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)?;
        info!(path = %self.path.display(), bytes = contents.len(), "Wrote text output");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
