//! Concurrent search across NETCONF XML and YANG model files.
//!
//! The pipeline has three stages: discovery walks the tree and builds the
//! candidate file set, a fixed-size rayon pool fans the candidates out to
//! workers, and each worker runs the per-file dual-pass search. Results are
//! handed back through rayon's collection machinery, so no worker ever
//! touches a shared mutable list.

use ignore::WalkBuilder;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

use crate::config::SearchConfig;
use crate::errors::{SearchError, SearchResult};
use crate::filters::{is_candidate_file, should_ignore};
use crate::matcher;
use crate::results::{MatchType, SearchMatch};
use crate::xml;

/// Walks `root` and collects every candidate configuration file.
///
/// The walk visits all entries (no hidden-file or gitignore filtering) in
/// lexical path order, so the candidate list is deterministic. Any walk
/// error — a missing root, an unreadable directory — aborts discovery and
/// propagates; scan failures are visible, never silently skipped.
pub fn find_candidate_files(
    root: &Path,
    ignore_patterns: &[String],
) -> SearchResult<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(false)
        .sort_by_file_path(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        if is_candidate_file(path) && !should_ignore(path, ignore_patterns) {
            trace!("Adding candidate file: {}", path.display());
            files.push(path.to_path_buf());
        }
    }

    debug!("Found {} candidate files under {}", files.len(), root.display());
    Ok(files)
}

/// Performs a concurrent search across candidate files under the configured
/// root directory.
///
/// Only discovery failures are fatal. A file that cannot be read contributes
/// zero results, and a `.xml` file that fails structural parsing still gets
/// the generic line pass. Within one file, results are in ascending line
/// order with no duplicate line numbers.
pub fn search(config: &SearchConfig) -> SearchResult<Vec<SearchMatch>> {
    info!(
        "Starting search for '{}' under {}",
        config.term,
        config.root_path.display()
    );

    let files = find_candidate_files(&config.root_path, &config.ignore_patterns)?;
    if files.is_empty() {
        debug!("No candidate files found");
        return Ok(Vec::new());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count.get())
        .build()
        .map_err(|e| SearchError::config_error(e.to_string()))?;

    let term_lower = config.term.to_lowercase();
    let results: Vec<SearchMatch> = pool.install(|| {
        files
            .par_iter()
            .filter_map(|path| match search_file(path, &term_lower) {
                Ok(matches) => Some(matches),
                Err(e) => {
                    // Per-file failures cost only that file's results.
                    debug!("Skipping {}: {}", path.display(), e);
                    None
                }
            })
            .flatten()
            .collect()
    });

    info!(
        "Search completed: {} matches for '{}'",
        results.len(),
        config.term
    );
    Ok(results)
}

/// Searches a single file, combining the structural and generic passes.
///
/// For `.xml` files whose root element parses, a case-insensitive hit inside
/// the structural content triggers a line scan of the raw content tagged
/// [`MatchType::Xml`]; line numbers always refer to the raw file, never the
/// extracted content. The generic pass then reports any remaining matching
/// lines, tagged by extension. A line number reported by the structural pass
/// is never reported again.
pub fn search_file(path: &Path, term_lower: &str) -> SearchResult<Vec<SearchMatch>> {
    trace!("Searching file: {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SearchError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => SearchError::permission_denied(path),
        _ => SearchError::IoError(e),
    })?;

    let mut matches = Vec::new();

    if path.extension().and_then(|e| e.to_str()) == Some("xml") {
        match xml::extract_inner_content(&content) {
            Ok(inner) if inner.to_lowercase().contains(term_lower) => {
                for (i, line) in content.lines().enumerate() {
                    if line.to_lowercase().contains(term_lower) {
                        matches.push(SearchMatch {
                            file_path: path.to_path_buf(),
                            line_number: i + 1,
                            line_content: line.trim().to_string(),
                            match_type: MatchType::Xml,
                        });
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                // Not fatal; the generic pass below still runs.
                trace!("Structural parse failed for {}: {}", path.display(), e);
            }
        }
    }

    let match_type = MatchType::for_path(path);
    for (i, line) in content.lines().enumerate() {
        if matcher::contains(&line.to_lowercase(), term_lower)
            && !matches.iter().any(|m| m.line_number == i + 1)
        {
            matches.push(SearchMatch {
                file_path: path.to_path_buf(),
                line_number: i + 1,
                line_content: line.trim().to_string(),
                match_type,
            });
        }
    }

    debug!("Found {} matches in {}", matches.len(), path.display());
    Ok(matches)
}
