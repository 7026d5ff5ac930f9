use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use refmt_core::CanonicalizedPathBuf;

use crate::utils::LogLevel;

/// File system query and logging capability the engine runs against.
///
/// Production code uses [`RealEnvironment`](super::RealEnvironment); tests
/// run the same engine against the in-memory test environment so the
/// directory-membership checks can be exercised without touching a real
/// disk.
pub trait Environment: Clone + Send + Sync + 'static {
  fn path_exists(&self, path: &Path) -> bool;
  fn path_is_file(&self, path: &Path) -> bool;
  fn path_is_directory(&self, path: &Path) -> bool;
  fn canonicalize(&self, path: &Path) -> Result<CanonicalizedPathBuf>;
  /// Immediate children of a directory, in a stable order.
  fn dir_children(&self, dir_path: &Path) -> Result<Vec<PathBuf>>;
  fn read_file(&self, file_path: &Path) -> Result<String>;
  fn write_file(&self, file_path: &Path, file_text: &str) -> Result<()>;
  fn mk_dir_all(&self, dir_path: &Path) -> Result<()>;
  fn cwd(&self) -> Result<PathBuf>;
  fn log(&self, text: &str);
  fn log_stderr(&self, text: &str);
  fn log_level(&self) -> LogLevel;
}

// a macro so the message is only built when debug logging is on
macro_rules! log_debug {
  ($environment:expr, $($arg:tt)*) => {
    if $environment.log_level() <= $crate::utils::LogLevel::Debug {
      let mut text = String::from("[DEBUG] ");
      text.push_str(&format!($($arg)*));
      $environment.log_stderr(&text);
    }
  }
}
