//! File selection rules for the candidate set.

use glob::Pattern;
use std::path::Path;

/// Checks if a path names a searchable configuration file.
///
/// Selected extensions are `.xml` and `.yang` (exact, case-sensitive match)
/// plus any path ending in `.yin`. Everything else is skipped.
pub fn is_candidate_file(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some("xml") | Some("yang") => true,
        _ => path.to_string_lossy().ends_with(".yin"),
    }
}

/// Checks if a file should be excluded based on glob ignore patterns
pub fn should_ignore(path: &Path, ignore_patterns: &[String]) -> bool {
    let path_str = path.to_string_lossy();

    ignore_patterns.iter().any(|pattern| {
        if let Ok(p) = Pattern::new(pattern) {
            let normalized_path = path_str.replace('\\', "/");
            p.matches(&normalized_path)
        } else {
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_candidate_file() {
        assert!(is_candidate_file(Path::new("config.xml")));
        assert!(is_candidate_file(Path::new("ietf-interfaces.yang")));
        assert!(is_candidate_file(Path::new("model.yin")));
        assert!(is_candidate_file(Path::new("deep/nested/dir/device.xml")));

        assert!(!is_candidate_file(Path::new("notes.txt")));
        assert!(!is_candidate_file(Path::new("config.json")));
        assert!(!is_candidate_file(Path::new("xml"))); // no extension
        assert!(!is_candidate_file(Path::new("config.xml.bak")));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(!is_candidate_file(Path::new("config.XML")));
        assert!(!is_candidate_file(Path::new("model.YANG")));
        assert!(!is_candidate_file(Path::new("model.YIN")));
    }

    #[test]
    fn test_should_ignore() {
        let ignore_patterns = vec![
            "**/vendor/**".to_string(),
            "**/*.generated.xml".to_string(),
        ];

        assert!(should_ignore(
            Path::new("models/vendor/private.yang"),
            &ignore_patterns
        ));
        assert!(should_ignore(
            Path::new("out/device.generated.xml"),
            &ignore_patterns
        ));

        assert!(!should_ignore(Path::new("models/device.xml"), &ignore_patterns));
        assert!(!should_ignore(Path::new("device.xml"), &[]));
    }
}
