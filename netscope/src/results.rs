//! Search result types.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Classification of the pathway that produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Generic line match in a file with no recognized model type
    Text,
    /// Match in a `.xml` document (structural or line-based)
    Xml,
    /// Match in a `.yang` or `.yin` model file
    Yang,
}

impl MatchType {
    /// Classifies a path by its extension.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("xml") => MatchType::Xml,
            Some("yang") => MatchType::Yang,
            _ if path.to_string_lossy().ends_with(".yin") => MatchType::Yang,
            _ => MatchType::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Text => "text",
            MatchType::Xml => "xml",
            MatchType::Yang => "yang",
        }
    }
}

/// One matching line in one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    /// Path of the file containing the match
    pub file_path: PathBuf,
    /// 1-based line number within the raw file content
    pub line_number: usize,
    /// The matching line, trimmed of surrounding whitespace
    pub line_content: String,
    /// Which matching pathway produced the result
    pub match_type: MatchType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_for_path() {
        assert_eq!(MatchType::for_path(Path::new("a.xml")), MatchType::Xml);
        assert_eq!(MatchType::for_path(Path::new("b.yang")), MatchType::Yang);
        assert_eq!(MatchType::for_path(Path::new("c.yin")), MatchType::Yang);
        assert_eq!(MatchType::for_path(Path::new("d.txt")), MatchType::Text);
        assert_eq!(MatchType::for_path(Path::new("noext")), MatchType::Text);
    }

    #[test]
    fn test_match_type_as_str() {
        assert_eq!(MatchType::Text.as_str(), "text");
        assert_eq!(MatchType::Xml.as_str(), "xml");
        assert_eq!(MatchType::Yang.as_str(), "yang");
    }

    #[test]
    fn test_search_match_creation() {
        let m = SearchMatch {
            file_path: PathBuf::from("config.xml"),
            line_number: 3,
            line_content: "<name>router-interface</name>".to_string(),
            match_type: MatchType::Xml,
        };

        assert_eq!(m.file_path, PathBuf::from("config.xml"));
        assert_eq!(m.line_number, 3);
        assert_eq!(m.match_type, MatchType::Xml);
    }
}
