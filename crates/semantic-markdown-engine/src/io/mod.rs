use crate::models::MarkdownFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidRoot(PathBuf),
    #[error("Path is not valid UTF-8 or not relative: {0}")]
    InvalidPath(PathBuf),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Recursively collects the files under `root` accepted by `is_markdown`,
/// sorted by relative path.
pub fn scan_markdown_files(
    root: &Path,
    is_markdown: impl Fn(&Path) -> bool,
) -> Result<Vec<MarkdownFile>, IoError> {
    validate_root(root)?;

    let mut paths = Vec::new();
    scan_directory_recursive(root, &is_markdown, &mut paths)?;

    let mut files = paths
        .into_iter()
        .map(|path| relative_to(root, &path).map(MarkdownFile::new))
        .collect::<Result<Vec<_>, _>>()?;
    files.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
    Ok(files)
}

fn relative_to(root: &Path, path: &Path) -> Result<RelativePathBuf, IoError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| IoError::InvalidPath(path.to_path_buf()))?;
    RelativePathBuf::from_path(relative).map_err(|_| IoError::InvalidPath(path.to_path_buf()))
}

fn scan_directory_recursive(
    dir: &Path,
    is_markdown: &impl Fn(&Path) -> bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, is_markdown, files)?;
        } else if is_markdown(&path) {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_root(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidRoot(path.to_path_buf()));
    }
    Ok(())
}
