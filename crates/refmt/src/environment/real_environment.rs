use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use parking_lot::Mutex;
use refmt_core::CanonicalizedPathBuf;

use super::Environment;
use crate::utils::LogLevel;

#[derive(Clone)]
pub struct RealEnvironment {
  output_lock: Arc<Mutex<()>>,
  log_level: LogLevel,
}

impl RealEnvironment {
  pub fn new(log_level: LogLevel) -> RealEnvironment {
    RealEnvironment {
      output_lock: Arc::new(Mutex::new(())),
      log_level,
    }
  }
}

impl Environment for RealEnvironment {
  fn path_exists(&self, path: &Path) -> bool {
    path.exists()
  }

  fn path_is_file(&self, path: &Path) -> bool {
    path.is_file()
  }

  fn path_is_directory(&self, path: &Path) -> bool {
    path.is_dir()
  }

  fn canonicalize(&self, path: &Path) -> Result<CanonicalizedPathBuf> {
    // dunce instead of fs::canonicalize to keep Windows paths out of UNC form
    let path = dunce::canonicalize(path).with_context(|| format!("Could not canonicalize {}", path.display()))?;
    Ok(CanonicalizedPathBuf::new(path))
  }

  fn dir_children(&self, dir_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir_path).with_context(|| format!("Could not read directory {}", dir_path.display()))?;
    let mut children = Vec::new();
    for entry in entries {
      children.push(entry?.path());
    }
    children.sort();
    Ok(children)
  }

  fn read_file(&self, file_path: &Path) -> Result<String> {
    std::fs::read_to_string(file_path).with_context(|| format!("Could not read file {}", file_path.display()))
  }

  fn write_file(&self, file_path: &Path, file_text: &str) -> Result<()> {
    std::fs::write(file_path, file_text).with_context(|| format!("Could not write file {}", file_path.display()))
  }

  fn mk_dir_all(&self, dir_path: &Path) -> Result<()> {
    std::fs::create_dir_all(dir_path).with_context(|| format!("Could not create directory {}", dir_path.display()))
  }

  fn cwd(&self) -> Result<PathBuf> {
    std::env::current_dir().context("Could not resolve the current working directory")
  }

  fn log(&self, text: &str) {
    let _g = self.output_lock.lock();
    #[allow(clippy::print_stdout)]
    {
      println!("{}", text);
    }
  }

  fn log_stderr(&self, text: &str) {
    let _g = self.output_lock.lock();
    #[allow(clippy::print_stderr)]
    {
      eprintln!("{}", text);
    }
  }

  fn log_level(&self) -> LogLevel {
    self.log_level
  }
}
