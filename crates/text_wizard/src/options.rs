use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use wizard_engine::{
    pixel_art::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND},
    Layout, Separator,
};

const OPTIONS_FILE: &str = "options.toml";

/// Defaults for every tool. Command line arguments take precedence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Glyph painted for lit pixel art cells
    pub foreground: String,
    /// Glyph painted for unlit pixel art cells
    pub background: String,
    pub layout: Layout,
    pub separator: Separator,
    pub repeat_count: u32,

    /// Treat every character above this code point as unrenderable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_codepoint: Option<u32>,
    /// Font files used to probe which styled letters render
    pub probe_fonts: Vec<PathBuf>,
    /// Look up the math fonts in the system font directories as well
    pub scan_system_fonts: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_FOREGROUND.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            layout: Layout::default(),
            separator: Separator::default(),
            repeat_count: 10,
            max_codepoint: None,
            probe_fonts: Vec::new(),
            scan_system_fonts: true,
        }
    }
}

impl Options {
    pub fn load_options() -> Self {
        match Self::get_options_file() {
            Some(options_file) => Self::load_from(&options_file),
            None => {
                log::warn!("No configuration directory, using default options");
                Self::default()
            }
        }
    }

    /// Read options from `options_file`. A missing file is logged and yields the defaults,
    /// so does a file that can't be read or parsed.
    pub fn load_from(options_file: &Path) -> Self {
        if !options_file.exists() {
            log::info!("Options file {} not found, using default options", options_file.display());
            return Self::default();
        }
        match fs::read_to_string(options_file) {
            Ok(txt) => match toml::from_str(&txt) {
                Ok(result) => return result,
                Err(err) => log::warn!("Error parsing options file {}: {}", options_file.display(), err),
            },
            Err(err) => log::warn!("Error reading options file {}: {}", options_file.display(), err),
        }
        Self::default()
    }

    pub fn store_options(&self, options_file: &Path) -> anyhow::Result<()> {
        if let Some(dir) = options_file.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(options_file, toml::to_string(self)?)?;
        Ok(())
    }

    /// Returns the configuration directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "text_wizard").map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    pub fn get_options_file() -> Option<PathBuf> {
        Self::get_config_dir().map(|dir| dir.join(OPTIONS_FILE))
    }

    /// Returns the log directory path, creating it when needed
    pub fn get_log_dir() -> Option<PathBuf> {
        let dir = Self::get_config_dir()?;
        if !dir.exists() && fs::create_dir_all(&dir).is_err() {
            return None;
        }
        Some(dir)
    }
}
