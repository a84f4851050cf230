//! Font variants and where their resources come from

use crate::error::{BannerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The named glyph sets a request can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontName {
    #[default]
    Standard,
    Shadow,
    Thinkertoy,
}

impl FontName {
    pub fn all() -> &'static [FontName] {
        &[Self::Standard, Self::Shadow, Self::Thinkertoy]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Shadow => "shadow",
            Self::Thinkertoy => "thinkertoy",
        }
    }

    /// Resource file holding this font
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name())
    }

    /// Map the web form's choice values to a font
    pub fn from_form_choice(choice: &str) -> Option<Self> {
        match choice {
            "option1" => Some(Self::Shadow),
            "option2" => Some(Self::Standard),
            "option3" => Some(Self::Thinkertoy),
            _ => None,
        }
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontName {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|font| font.name().eq_ignore_ascii_case(s))
            .or_else(|| Self::from_form_choice(s))
            .ok_or_else(|| BannerError::UnknownFont(s.to_string()))
    }
}

/// Resolves a font name to its raw resource text
pub trait FontSource: Send + Sync {
    fn read(&self, font: FontName) -> Result<String>;

    /// Human-readable location of a font, for listings and logs
    fn locate(&self, font: FontName) -> String;
}

/// Reads `<dir>/<name>.txt`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, font: FontName) -> PathBuf {
        self.dir.join(font.file_name())
    }
}

impl FontSource for DirectorySource {
    fn read(&self, font: FontName) -> Result<String> {
        let path = self.path_for(font);
        tracing::debug!("Reading font {} from {}", font, path.display());

        std::fs::read_to_string(&path)
            .map_err(|source| BannerError::ResourceUnavailable { path, source })
    }

    fn locate(&self, font: FontName) -> String {
        self.path_for(font).display().to_string()
    }
}

/// Serves font text held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    fonts: HashMap<FontName, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: FontName, resource: impl Into<String>) -> Self {
        self.fonts.insert(font, resource.into());
        self
    }
}

impl FontSource for MemorySource {
    fn read(&self, font: FontName) -> Result<String> {
        self.fonts
            .get(&font)
            .cloned()
            .ok_or_else(|| BannerError::ResourceUnavailable {
                path: PathBuf::from(font.file_name()),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "font not present in memory source",
                ),
            })
    }

    fn locate(&self, font: FontName) -> String {
        format!("memory:{}", font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_font_names() {
        assert_eq!("standard".parse::<FontName>().unwrap(), FontName::Standard);
        assert_eq!("Shadow".parse::<FontName>().unwrap(), FontName::Shadow);
        assert_eq!(" THINKERTOY ".parse::<FontName>().unwrap(), FontName::Thinkertoy);
    }

    #[test]
    fn test_form_choices() {
        assert_eq!("option1".parse::<FontName>().unwrap(), FontName::Shadow);
        assert_eq!("option2".parse::<FontName>().unwrap(), FontName::Standard);
        assert_eq!("option3".parse::<FontName>().unwrap(), FontName::Thinkertoy);
        assert_eq!(FontName::from_form_choice("option4"), None);
    }

    #[test]
    fn test_unknown_font() {
        let err = "comic".parse::<FontName>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFont);
        assert_eq!(err.kind().status_code(), 400);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(FontName::Standard.file_name(), "standard.txt");
        assert_eq!(FontName::all().len(), 3);
    }

    #[test]
    fn test_directory_source_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shadow.txt"), "\nshadow").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.read(FontName::Shadow).unwrap(), "\nshadow");

        let err = source.read(FontName::Standard).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceUnavailable);
        assert!(source.locate(FontName::Standard).ends_with("standard.txt"));
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new().with_font(FontName::Standard, "\nabc");
        assert_eq!(source.read(FontName::Standard).unwrap(), "\nabc");
        assert!(source.read(FontName::Thinkertoy).is_err());
        assert_eq!(source.locate(FontName::Thinkertoy), "memory:thinkertoy");
    }
}
