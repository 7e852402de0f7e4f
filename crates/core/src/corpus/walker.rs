//! Recursive corpus directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum CorpusWalkError {
    #[error("corpus root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk corpus directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A discovered markdown file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the corpus root.
    pub relative_path: PathBuf,
}

/// Walker for discovering markdown files under a corpus root.
#[derive(Debug)]
pub struct CorpusWalker {
    root: PathBuf,
    /// Folders to exclude from walking (relative paths from the root).
    excluded_folders: Vec<PathBuf>,
}

impl CorpusWalker {
    /// Create a new walker for the given corpus root.
    pub fn new(root: &Path) -> Result<Self, CorpusWalkError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a new walker with folder exclusions.
    ///
    /// Excluded folders can be specified as:
    /// - Relative paths from the corpus root (e.g., "drafts/old")
    /// - Absolute paths (will be converted to relative)
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, CorpusWalkError> {
        let root = root
            .canonicalize()
            .map_err(|_| CorpusWalkError::MissingRoot(root.display().to_string()))?;

        // Normalize exclusions to be relative to the root
        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Walk the corpus and return all markdown files, sorted by relative
    /// path. Hidden directories, common build directories, and configured
    /// exclusions are skipped.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, CorpusWalkError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                CorpusWalkError::WalkError(self.root.display().to_string(), e)
            })?;

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let relative_path =
                path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            files.push(WalkedFile { absolute_path: path.to_path_buf(), relative_path });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        // Skip hidden files and directories
        if name.starts_with('.') {
            return true;
        }

        // Skip common non-corpus directories
        if matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv") {
            return true;
        }

        // Check against configured exclusions
        if !self.excluded_folders.is_empty() {
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                for excluded in &self.excluded_folders {
                    if relative.starts_with(excluded) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Get the corpus root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_corpus() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("post1.md"), "# Post 1").unwrap();
        fs::write(root.join("post2.md"), "# Post 2").unwrap();

        fs::create_dir(root.join("guides")).unwrap();
        fs::write(root.join("guides/setup.md"), "# Setup").unwrap();

        // Hidden directory (should be skipped)
        fs::create_dir(root.join(".obsidian")).unwrap();
        fs::write(root.join(".obsidian/hidden.md"), "# Hidden").unwrap();

        // Non-markdown file (should be skipped)
        fs::write(root.join("image.png"), [0u8; 4]).unwrap();

        dir
    }

    #[test]
    fn walk_finds_markdown_files() {
        let corpus = create_test_corpus();
        let walker = CorpusWalker::new(corpus.path()).unwrap();
        let files = walker.walk().unwrap();

        assert_eq!(files.len(), 3);

        let paths: Vec<_> = files.iter().map(|f| f.relative_path.clone()).collect();
        assert!(paths.contains(&PathBuf::from("post1.md")));
        assert!(paths.contains(&PathBuf::from("post2.md")));
        assert!(paths.contains(&PathBuf::from("guides/setup.md")));
    }

    #[test]
    fn walk_skips_hidden_directories() {
        let corpus = create_test_corpus();
        let walker = CorpusWalker::new(corpus.path()).unwrap();
        let files = walker.walk().unwrap();

        let paths: Vec<_> =
            files.iter().map(|f| f.relative_path.to_string_lossy().to_string()).collect();

        assert!(!paths.iter().any(|p| p.contains(".obsidian")));
    }

    #[test]
    fn walk_skips_non_markdown() {
        let corpus = create_test_corpus();
        let walker = CorpusWalker::new(corpus.path()).unwrap();
        let files = walker.walk().unwrap();

        let paths: Vec<_> =
            files.iter().map(|f| f.relative_path.to_string_lossy().to_string()).collect();

        assert!(!paths.iter().any(|p| p.contains("image.png")));
    }

    #[test]
    fn walk_results_sorted() {
        let corpus = create_test_corpus();
        let walker = CorpusWalker::new(corpus.path()).unwrap();
        let files = walker.walk().unwrap();

        let paths: Vec<_> = files.iter().map(|f| &f.relative_path).collect();
        let mut sorted = paths.clone();
        sorted.sort();

        assert_eq!(paths, sorted);
    }

    #[test]
    fn missing_root() {
        let result = CorpusWalker::new(Path::new("/nonexistent/path"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CorpusWalkError::MissingRoot(_)));
    }

    #[test]
    fn walk_with_exclusions() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("post.md"), "# Post").unwrap();

        fs::create_dir_all(root.join("drafts")).unwrap();
        fs::write(root.join("drafts/wip.md"), "# WIP").unwrap();

        fs::create_dir_all(root.join("archive/old")).unwrap();
        fs::write(root.join("archive/old/legacy.md"), "# Legacy").unwrap();

        // Walk without exclusions - should find all 3 files
        let walker = CorpusWalker::new(root).unwrap();
        assert_eq!(walker.walk().unwrap().len(), 3);

        // Walk with exclusions - should skip drafts and archive
        let excluded = vec![PathBuf::from("drafts"), PathBuf::from("archive")];
        let walker = CorpusWalker::with_exclusions(root, excluded).unwrap();
        let files = walker.walk().unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, PathBuf::from("post.md"));
    }

    #[test]
    fn walk_with_nested_exclusion() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("docs/internal")).unwrap();
        fs::write(root.join("docs/readme.md"), "# Docs").unwrap();
        fs::write(root.join("docs/internal/secret.md"), "# Secret").unwrap();

        fs::write(root.join("note.md"), "# Note").unwrap();

        // Exclude only docs/internal, not all of docs
        let excluded = vec![PathBuf::from("docs/internal")];
        let walker = CorpusWalker::with_exclusions(root, excluded).unwrap();
        let files = walker.walk().unwrap();

        assert_eq!(files.len(), 2);

        let paths: Vec<_> =
            files.iter().map(|f| f.relative_path.to_string_lossy().to_string()).collect();

        assert!(paths.contains(&"note.md".to_string()));
        assert!(paths.contains(&"docs/readme.md".to_string()));
        assert!(!paths.iter().any(|p| p.contains("internal")));
    }
}
