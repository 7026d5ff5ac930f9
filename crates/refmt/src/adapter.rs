use std::path::Path;

use refmt_core::CanonicalizedPathBuf;
use refmt_core::CodeFormatter;
use refmt_core::FormatError;
use refmt_core::Granularity;

use crate::environment::Environment;
use crate::paths;

/// Presents the full four-granularity surface over a formatter that
/// natively supports only a subset.
///
/// A coarser request is synthesized from the finer operations the wrapped
/// formatter does have: many files loop over single files, a directory
/// enumerates its immediate child files, and a directory tree walks its
/// subdirectories. The reverse never happens; a request the formatter
/// cannot express through supported operations fails rather than invoking
/// behavior the formatter does not have.
///
/// Layered over the reformat queue, whose only operation is a single-file
/// enqueue, this is also how a caller hands the queue a whole directory.
pub struct FormatterAdapter<TEnvironment: Environment, TFormatter: CodeFormatter> {
  environment: TEnvironment,
  inner: TFormatter,
}

impl<TEnvironment: Environment, TFormatter: CodeFormatter> FormatterAdapter<TEnvironment, TFormatter> {
  pub fn new(environment: TEnvironment, inner: TFormatter) -> FormatterAdapter<TEnvironment, TFormatter> {
    FormatterAdapter { environment, inner }
  }

  fn ensure_existing_file(&self, file_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    if !self.environment.path_exists(file_path.as_ref()) {
      Err(FormatError::PathNotFound(file_path.as_ref().to_path_buf()))
    } else if !self.environment.path_is_file(file_path.as_ref()) {
      Err(FormatError::ExpectedFile(file_path.as_ref().to_path_buf()))
    } else {
      Ok(())
    }
  }

  fn ensure_existing_directory(&self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    if !self.environment.path_exists(dir_path.as_ref()) {
      Err(FormatError::PathNotFound(dir_path.as_ref().to_path_buf()))
    } else if !self.environment.path_is_directory(dir_path.as_ref()) {
      Err(FormatError::ExpectedDirectory(dir_path.as_ref().to_path_buf()))
    } else {
      Ok(())
    }
  }
}

impl<TEnvironment: Environment, TFormatter: CodeFormatter> CodeFormatter for FormatterAdapter<TEnvironment, TFormatter> {
  fn supports_file_type(&self, file_path: &Path) -> bool {
    self.inner.supports_file_type(file_path)
  }

  fn supports_one_file(&self) -> bool {
    self.inner.supports_one_file()
  }

  // a level is supported when the formatter has it natively or the next
  // finer level can stand in for it
  fn supports_many_files(&self) -> bool {
    self.inner.supports_many_files() || self.inner.supports_one_file()
  }

  fn supports_directory(&self) -> bool {
    self.inner.supports_directory() || self.supports_many_files()
  }

  fn supports_recursive(&self) -> bool {
    self.inner.supports_recursive() || self.supports_directory()
  }

  fn format_one(&mut self, file_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    self.ensure_existing_file(file_path)?;
    if self.inner.supports_one_file() {
      self.inner.format_one(file_path)
    } else {
      Err(FormatError::Unsupported(Granularity::OneFile))
    }
  }

  fn format_many(&mut self, file_paths: &[CanonicalizedPathBuf]) -> Result<(), FormatError> {
    for file_path in file_paths {
      self.ensure_existing_file(file_path)?;
    }
    if self.inner.supports_many_files() {
      self.inner.format_many(file_paths)
    } else if self.inner.supports_one_file() {
      for file_path in file_paths {
        self.inner.format_one(file_path)?;
      }
      Ok(())
    } else {
      Err(FormatError::Unsupported(Granularity::ManyFiles))
    }
  }

  fn format_directory(&mut self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    self.ensure_existing_directory(dir_path)?;
    if self.inner.supports_directory() {
      self.inner.format_directory(dir_path)
    } else if self.supports_many_files() {
      let file_paths = paths::matching_files_in_dir(&self.environment, dir_path, &|path| self.inner.supports_file_type(path))?;
      if file_paths.is_empty() {
        return Ok(());
      }
      log_debug!(self.environment, "Formatting {} as its {} matching files", dir_path.display(), file_paths.len());
      self.format_many(&file_paths)
    } else {
      Err(FormatError::Unsupported(Granularity::Directory))
    }
  }

  fn format_recursive(&mut self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    self.ensure_existing_directory(dir_path)?;
    if self.inner.supports_recursive() {
      self.inner.format_recursive(dir_path)
    } else if self.supports_directory() {
      self.format_directory(dir_path)?;
      for child_dir_path in paths::child_directories(&self.environment, dir_path)? {
        self.format_recursive(&child_dir_path)?;
      }
      Ok(())
    } else {
      Err(FormatError::Unsupported(Granularity::Recursive))
    }
  }
}
