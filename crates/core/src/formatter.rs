use std::fmt;
use std::path::Path;

use crate::CanonicalizedPathBuf;
use crate::FormatError;

/// The four shapes of request a formatter may natively accept.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
  OneFile,
  ManyFiles,
  Directory,
  Recursive,
}

impl fmt::Display for Granularity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Granularity::OneFile => "a single file",
      Granularity::ManyFiles => "multiple files",
      Granularity::Directory => "a directory",
      Granularity::Recursive => "a directory tree",
    })
  }
}

/// An agent able to reformat source files at one or more granularities.
///
/// The support flags are fixed for the lifetime of an instance. An operation
/// invoked while its flag is false must fail with
/// [`FormatError::Unsupported`] rather than silently doing nothing, and may
/// fail with an invalid-argument error when the path's kind does not match
/// what the operation expects.
pub trait CodeFormatter {
  /// Whether the formatter handles files with this name.
  fn supports_file_type(&self, file_path: &Path) -> bool;

  fn supports_one_file(&self) -> bool;
  fn supports_many_files(&self) -> bool;
  fn supports_directory(&self) -> bool;
  fn supports_recursive(&self) -> bool;

  fn format_one(&mut self, file_path: &CanonicalizedPathBuf) -> Result<(), FormatError>;
  fn format_many(&mut self, file_paths: &[CanonicalizedPathBuf]) -> Result<(), FormatError>;
  /// Reformats the matching files directly inside the directory, not the
  /// ones in its subdirectories.
  fn format_directory(&mut self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError>;
  /// Reformats the matching files in the directory's entire tree.
  fn format_recursive(&mut self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError>;
}

/// A formatter stays usable through a mutable reference, so dispatch
/// layers can be composed over a formatter the caller still owns.
impl<T: CodeFormatter + ?Sized> CodeFormatter for &mut T {
  fn supports_file_type(&self, file_path: &Path) -> bool {
    (**self).supports_file_type(file_path)
  }

  fn supports_one_file(&self) -> bool {
    (**self).supports_one_file()
  }

  fn supports_many_files(&self) -> bool {
    (**self).supports_many_files()
  }

  fn supports_directory(&self) -> bool {
    (**self).supports_directory()
  }

  fn supports_recursive(&self) -> bool {
    (**self).supports_recursive()
  }

  fn format_one(&mut self, file_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    (**self).format_one(file_path)
  }

  fn format_many(&mut self, file_paths: &[CanonicalizedPathBuf]) -> Result<(), FormatError> {
    (**self).format_many(file_paths)
  }

  fn format_directory(&mut self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    (**self).format_directory(dir_path)
  }

  fn format_recursive(&mut self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    (**self).format_recursive(dir_path)
  }
}
