use std::path::PathBuf;

use thiserror::Error;

use crate::Granularity;

#[derive(Debug, Error)]
pub enum FormatError {
  /// The operation's support flag is false and no finer-grained fallback
  /// exists.
  #[error("the formatter does not support formatting {0}")]
  Unsupported(Granularity),
  #[error("path not found: {}", .0.display())]
  PathNotFound(PathBuf),
  #[error("expected a file: {}", .0.display())]
  ExpectedFile(PathBuf),
  #[error("expected a directory: {}", .0.display())]
  ExpectedDirectory(PathBuf),
  /// The file's name does not satisfy the formatter's file masks.
  #[error("the formatter does not handle this file type: {}", .0.display())]
  UnmatchedFileType(PathBuf),
  /// Files that no dispatch pass could claim during a flush. They are
  /// reported once and not retried.
  #[error("could not reformat {}", unresolved_text(.0))]
  Unresolved(Vec<PathBuf>),
  #[error(transparent)]
  Failed(#[from] anyhow::Error),
}

fn unresolved_text(paths: &[PathBuf]) -> String {
  let count_text = if paths.len() == 1 {
    "1 file".to_string()
  } else {
    format!("{} files", paths.len())
  };
  let paths_text = paths.iter().map(|path| path.display().to_string()).collect::<Vec<_>>().join(", ");
  format!("{}: {}", count_text, paths_text)
}
