use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wizard_engine::FontAvailability;

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Font files found in the system and user font directories.
#[derive(Debug, Default)]
pub struct SystemFonts {
    files: Vec<PathBuf>,
}

impl SystemFonts {
    pub fn scan() -> Self {
        Self::scan_dirs(&font_directories())
    }

    pub fn scan_dirs(dirs: &[PathBuf]) -> Self {
        let mut files = Vec::new();
        for dir in dirs.iter().filter(|dir| dir.is_dir()) {
            for entry in WalkDir::new(dir).follow_links(true).into_iter().filter_map(|e| e.ok()) {
                if entry.file_type().is_file() && is_font_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        }
        let fonts = Self { files };
        log::debug!("found {} font files", fonts.len());
        fonts
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Best matching file for a font family: an exact file name match, else the
    /// shortest file name starting with the family name ("Symbola" -> "Symbola_hint.ttf").
    pub fn find_family(&self, family: &str) -> Option<&Path> {
        let wanted = normalize(family);
        if wanted.is_empty() {
            return None;
        }
        let mut best: Option<(&Path, usize)> = None;
        for file in &self.files {
            let Some(stem) = file.file_stem() else {
                continue;
            };
            let stem = normalize(&stem.to_string_lossy());
            if stem == wanted {
                return Some(file);
            }
            if stem.starts_with(&wanted) && best.is_none_or(|(_, len)| stem.len() < len) {
                best = Some((file, stem.len()));
            }
        }
        best.map(|(file, _)| file)
    }

    /// Files for `families`, in the given order, skipping families that aren't installed.
    pub fn resolve(&self, families: &[&str]) -> Vec<PathBuf> {
        families.iter().filter_map(|family| self.find_family(family)).map(Path::to_path_buf).collect()
    }
}

impl FontAvailability for SystemFonts {
    fn is_available(&self, family: &str) -> bool {
        self.find_family(family).is_some()
    }
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.as_str()))
}

fn normalize(name: &str) -> String {
    name.chars().filter(|c| c.is_alphanumeric()).flat_map(char::to_lowercase).collect()
}

pub fn font_directories() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(user_dirs) = directories::UserDirs::new() {
        if let Some(font_dir) = user_dirs.font_dir() {
            dirs.push(font_dir.to_path_buf());
        }
    }
    if let Some(base_dirs) = directories::BaseDirs::new() {
        dirs.push(base_dirs.data_dir().join("fonts"));
        dirs.push(base_dirs.home_dir().join(".fonts"));
    }
    if cfg!(windows) {
        dirs.push(PathBuf::from(r"C:\Windows\Fonts"));
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        dirs.push(PathBuf::from("/Library/Fonts"));
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
    }
    let mut unique: Vec<PathBuf> = Vec::with_capacity(dirs.len());
    for dir in dirs {
        if !unique.contains(&dir) {
            unique.push(dir);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonts(names: &[&str]) -> SystemFonts {
        SystemFonts {
            files: names.iter().map(|n| PathBuf::from("/fonts").join(n)).collect(),
        }
    }

    #[test]
    fn test_exact_match_wins() {
        let fonts = fonts(&["DejaVuSansMono.ttf", "DejaVuSans.ttf", "DejaVuSans-Bold.ttf"]);
        assert_eq!(fonts.find_family("DejaVu Sans"), Some(Path::new("/fonts/DejaVuSans.ttf")));
    }

    #[test]
    fn test_prefix_match_prefers_shortest() {
        let fonts = fonts(&["NotoSansMath-Regular-Hinted.ttf", "NotoSansMath-Regular.ttf"]);
        assert_eq!(fonts.find_family("Noto Sans Math"), Some(Path::new("/fonts/NotoSansMath-Regular.ttf")));
        assert!(fonts.is_available("noto sans math"));
        assert!(!fonts.is_available("Symbola"));
        assert!(!fonts.is_available(""));
    }

    #[test]
    fn test_resolve_keeps_order() {
        let fonts = fonts(&["Symbola.otf", "Code2000.ttf"]);
        assert_eq!(
            fonts.resolve(&["Noto Sans Math", "Code2000", "Symbola"]),
            vec![PathBuf::from("/fonts/Code2000.ttf"), PathBuf::from("/fonts/Symbola.otf")]
        );
    }

    #[test]
    fn test_font_extensions() {
        assert!(is_font_file(Path::new("a/Symbola.TTF")));
        assert!(is_font_file(Path::new("a/b.otf")));
        assert!(!is_font_file(Path::new("a/readme.txt")));
        assert!(!is_font_file(Path::new("a/noext")));
    }

    #[test]
    fn test_scan_missing_dir() {
        assert_eq!(SystemFonts::scan_dirs(&[PathBuf::from("/nonexistent/fonts")]).len(), 0);
    }
}
