use crate::error::{ExtractError, Result};
use crate::extractor::decl::extract;
use crate::extractor::model::ExtractionResult;
use crate::extractor::name::normalize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

const SOURCE_EXTENSION: &str = "rs";

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub root: PathBuf,
    /// Directory names whose subtrees are skipped, e.g. `target`.
    pub exclude: Vec<String>,
    pub follow_links: bool,
}

impl SearchConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: Vec::new(),
            follow_links: false,
        }
    }
}

fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude.iter().any(|e| e == name))
}

fn is_source_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry.path().extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}

/// Search `root` with the default configuration.
pub fn search(root: impl AsRef<Path>, qualified_name: &str) -> Result<ExtractionResult> {
    search_with(&SearchConfig::new(root.as_ref()), qualified_name)
}

/// Walk the tree in file-name order and return the first definition of
/// `qualified_name`, stopping as soon as one file yields it.
///
/// Files that fail to parse or lack the name are skipped. Any error walking
/// the tree or reading a file aborts the search.
pub fn search_with(cfg: &SearchConfig, qualified_name: &str) -> Result<ExtractionResult> {
    let name = normalize(qualified_name);
    debug!(root = %cfg.root.display(), name, "searching for definition");

    let walker = WalkDir::new(&cfg.root)
        .follow_links(cfg.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded(e, &cfg.exclude));

    for entry in walker {
        let entry = entry.map_err(|err| walk_error(err, &cfg.root))?;
        if !is_source_file(&entry) {
            continue;
        }
        if let Some(found) = process_file(entry.path(), name)? {
            debug!(path = %found.file_path.display(), kind = %found.kind, "definition found");
            return Ok(found);
        }
    }

    Err(ExtractError::NotFound {
        name: qualified_name.to_string(),
    })
}

// Keep the inner io::Error so the path appears once in the message.
fn walk_error(err: walkdir::Error, root: &Path) -> ExtractError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    ExtractError::Io { path, source }
}

fn process_file(path: &Path, name: &str) -> Result<Option<ExtractionResult>> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let Ok(content) = String::from_utf8(bytes) else {
        debug!(path = %path.display(), "skipping file that is not valid UTF-8");
        return Ok(None);
    };

    match extract(&content, name) {
        Ok((source, kind)) => Ok(Some(ExtractionResult {
            file_path: path.to_path_buf(),
            source,
            kind,
        })),
        Err(ExtractError::Parse { message }) => {
            debug!(path = %path.display(), %message, "skipping file that failed to parse");
            Ok(None)
        }
        Err(ExtractError::NotFound { .. }) => {
            trace!(path = %path.display(), "no matching definition");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
