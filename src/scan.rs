//! Directory tree scanning
//!
//! This module walks a directory tree rooted at the scan root and builds an
//! ordered in-memory tree of directories and qualifying Markdown documents.
//! The walk is fully synchronous; failures are localized so one unreadable
//! subtree never aborts its siblings.
//!
//! Skip rules:
//!
//! - Directories whose name starts with `.` are skipped entirely.
//! - Directories whose name starts with `img` are skipped entirely. This is a
//!   literal prefix match, so an unrelated directory named e.g. `imgbank` is
//!   also skipped.
//! - Files qualify only when the name case-insensitively ends with `.md` and
//!   is not the reserved output filename `toc.md`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::headers::{Header, extract_headers};

/// Reserved name of the generated outline file. Excluded from scanning so the
/// outline never lists its own previous run.
pub const OUTPUT_FILENAME: &str = "toc.md";

/// Extension that marks a qualifying document (matched case-insensitively).
const DOC_EXTENSION: &str = ".md";

/// Directory name prefix for image-asset folders. Literal prefix match.
const IMAGE_DIR_PREFIX: &str = "img";

/// A node in the scanned tree: either a directory or a qualifying document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Dir {
        name: String,
        path: PathBuf,
        depth: usize,
        children: Vec<TreeNode>,
    },
    Doc {
        name: String,
        /// Path relative to the scan root, always `/`-separated
        rel_path: String,
        depth: usize,
        headers: Vec<Header>,
    },
}

/// Scans a directory tree for Markdown documents.
///
/// Holds the resolved scan root so relative paths can be computed without any
/// process-wide state.
pub struct Scanner {
    root: PathBuf,
}

/// A directory entry with its classification resolved, ready for sorting.
struct Entry {
    name: String,
    path: PathBuf,
    is_dir: bool,
    is_file: bool,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scan the root directory, returning its ordered top-level nodes.
    /// Direct children of the root are at depth 0.
    pub fn scan(&self) -> Vec<TreeNode> {
        self.scan_dir(&self.root, 0)
    }

    fn scan_dir(&self, dir: &Path, depth: usize) -> Vec<TreeNode> {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                eprintln!("mdtoc: cannot list '{}': {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut entries: Vec<Entry> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let path = e.path();
                let name = e.file_name().to_string_lossy().into_owned();
                // Follows symlinks, like the rest of the walk
                match fs::metadata(&path) {
                    Ok(meta) => Some(Entry {
                        name,
                        is_dir: meta.is_dir(),
                        is_file: meta.is_file(),
                        path,
                    }),
                    Err(e) => {
                        eprintln!("mdtoc: cannot stat '{}': {}", path.display(), e);
                        None
                    }
                }
            })
            .collect();

        // Directories before files, then case-insensitive by name
        entries.sort_by(|a, b| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut nodes = Vec::new();

        for entry in entries {
            if entry.is_dir {
                if should_skip_dir(&entry.name) {
                    continue;
                }
                let children = self.scan_dir(&entry.path, depth + 1);
                nodes.push(TreeNode::Dir {
                    name: entry.name,
                    path: entry.path,
                    depth,
                    children,
                });
            } else if entry.is_file
                && is_markdown_file(&entry.name)
                && entry.name != OUTPUT_FILENAME
            {
                let rel_path = self.relative_path(&entry.path);
                println!("{}", rel_path);
                let headers = extract_headers(&entry.path);
                nodes.push(TreeNode::Doc {
                    name: entry.name,
                    rel_path,
                    depth,
                    headers,
                });
            }
            // Any other file is silently skipped
        }

        nodes
    }

    /// Path relative to the scan root, joined with forward slashes on every
    /// platform so the rendered outline is host-independent.
    fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Check if a filename marks a qualifying Markdown document.
fn is_markdown_file(name: &str) -> bool {
    name.to_lowercase().ends_with(DOC_EXTENSION)
}

/// Check if a directory should be excluded from the scan entirely.
fn should_skip_dir(name: &str) -> bool {
    name.starts_with('.') || name.starts_with(IMAGE_DIR_PREFIX)
}
