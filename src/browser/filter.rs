use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::project::{FileRecord, FileType};

/// Media type radio selection. `All` disables type filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Video,
    Audio,
    Image,
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 4] = [
        TypeFilter::All,
        TypeFilter::Video,
        TypeFilter::Audio,
        TypeFilter::Image,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Video => "Video",
            TypeFilter::Audio => "Audio",
            TypeFilter::Image => "Image",
        }
    }

    pub fn accepts(&self, file_type: FileType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Video => file_type == FileType::Video,
            TypeFilter::Audio => file_type == FileType::Audio,
            TypeFilter::Image => file_type == FileType::Image,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "video" => Ok(TypeFilter::Video),
            "audio" => Ok(TypeFilter::Audio),
            "image" => Ok(TypeFilter::Image),
            other => Err(format!(
                "unknown type filter '{other}' (expected all, video, audio or image)"
            )),
        }
    }
}

/// The type radio plus the filename filter text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub type_filter: TypeFilter,
    pub text: String,
}

impl FilterState {
    pub fn new(type_filter: TypeFilter) -> Self {
        Self {
            type_filter,
            text: String::new(),
        }
    }

    /// Type filter first, then a case-sensitive substring match on the file name.
    pub fn matches(&self, file: &FileRecord) -> bool {
        if !self.type_filter.accepts(file.file_type) {
            return false;
        }
        self.text.is_empty() || file.file_name().contains(self.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_accepts_every_type() {
        for file_type in [
            FileType::Video,
            FileType::Audio,
            FileType::Image,
            FileType::Unknown,
        ] {
            assert!(TypeFilter::All.accepts(file_type));
        }
    }

    #[test]
    fn single_type_rejects_others_and_unknown() {
        assert!(TypeFilter::Audio.accepts(FileType::Audio));
        assert!(!TypeFilter::Audio.accepts(FileType::Video));
        assert!(!TypeFilter::Image.accepts(FileType::Unknown));
    }

    #[test]
    fn text_matches_file_name_not_directory() {
        let filter = FilterState {
            type_filter: TypeFilter::All,
            text: "holiday".into(),
        };
        assert!(filter.matches(&FileRecord::new("1", "/media/holiday-01.mp4")));
        assert!(!filter.matches(&FileRecord::new("2", "/holiday/beach.mp4")));
    }

    #[test]
    fn text_match_is_case_sensitive() {
        let filter = FilterState {
            type_filter: TypeFilter::All,
            text: "Beach".into(),
        };
        assert!(!filter.matches(&FileRecord::new("1", "/m/beach.mp4")));
    }

    #[test]
    fn type_and_text_combine() {
        let filter = FilterState {
            type_filter: TypeFilter::Video,
            text: "beach".into(),
        };
        assert!(filter.matches(&FileRecord::new("1", "/m/beach.mp4")));
        assert!(!filter.matches(&FileRecord::new("2", "/m/beach.wav")));
    }

    #[test]
    fn parse_type_filter() {
        assert_eq!("video".parse::<TypeFilter>(), Ok(TypeFilter::Video));
        assert_eq!("IMAGE".parse::<TypeFilter>(), Ok(TypeFilter::Image));
        assert!("clips".parse::<TypeFilter>().is_err());
        assert_eq!(TypeFilter::Audio.to_string(), "audio");
    }
}
