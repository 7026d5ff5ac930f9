use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use parking_lot::Mutex;
use refmt_core::CanonicalizedPathBuf;

use super::Environment;
use crate::utils::LogLevel;

/// In-memory file system for tests. Paths are expected to be absolute and
/// already canonical; `canonicalize` only checks existence.
#[derive(Clone)]
pub struct TestEnvironment {
  files: Arc<Mutex<HashMap<PathBuf, String>>>,
  directories: Arc<Mutex<HashSet<PathBuf>>>,
  logged_messages: Arc<Mutex<Vec<String>>>,
  logged_stderr_messages: Arc<Mutex<Vec<String>>>,
  log_level: LogLevel,
}

impl TestEnvironment {
  pub fn new() -> TestEnvironment {
    let environment = TestEnvironment {
      files: Default::default(),
      directories: Default::default(),
      logged_messages: Default::default(),
      logged_stderr_messages: Default::default(),
      log_level: LogLevel::Info,
    };
    environment.directories.lock().insert(PathBuf::from("/"));
    environment
  }

  pub fn get_logged_messages(&self) -> Vec<String> {
    self.logged_messages.lock().clone()
  }

  pub fn get_logged_stderr_messages(&self) -> Vec<String> {
    self.logged_stderr_messages.lock().clone()
  }

  fn add_ancestor_dirs(&self, path: &Path) {
    let mut directories = self.directories.lock();
    let mut current = path.parent();
    while let Some(dir_path) = current {
      directories.insert(dir_path.to_path_buf());
      current = dir_path.parent();
    }
  }
}

impl Environment for TestEnvironment {
  fn path_exists(&self, path: &Path) -> bool {
    self.path_is_file(path) || self.path_is_directory(path)
  }

  fn path_is_file(&self, path: &Path) -> bool {
    self.files.lock().contains_key(path)
  }

  fn path_is_directory(&self, path: &Path) -> bool {
    self.directories.lock().contains(path)
  }

  fn canonicalize(&self, path: &Path) -> Result<CanonicalizedPathBuf> {
    if !self.path_exists(path) {
      bail!("Could not canonicalize {}", path.display());
    }
    Ok(CanonicalizedPathBuf::new(path.to_path_buf()))
  }

  fn dir_children(&self, dir_path: &Path) -> Result<Vec<PathBuf>> {
    if !self.path_is_directory(dir_path) {
      bail!("Could not read directory {}", dir_path.display());
    }
    let mut children = Vec::new();
    for file_path in self.files.lock().keys() {
      if file_path.parent() == Some(dir_path) {
        children.push(file_path.clone());
      }
    }
    for child_dir_path in self.directories.lock().iter() {
      if child_dir_path.parent() == Some(dir_path) {
        children.push(child_dir_path.clone());
      }
    }
    children.sort();
    Ok(children)
  }

  fn read_file(&self, file_path: &Path) -> Result<String> {
    match self.files.lock().get(file_path) {
      Some(text) => Ok(text.clone()),
      None => bail!("Could not read file {}", file_path.display()),
    }
  }

  fn write_file(&self, file_path: &Path, file_text: &str) -> Result<()> {
    self.files.lock().insert(file_path.to_path_buf(), file_text.to_string());
    self.add_ancestor_dirs(file_path);
    Ok(())
  }

  fn mk_dir_all(&self, dir_path: &Path) -> Result<()> {
    self.directories.lock().insert(dir_path.to_path_buf());
    self.add_ancestor_dirs(dir_path);
    Ok(())
  }

  fn cwd(&self) -> Result<PathBuf> {
    Ok(PathBuf::from("/"))
  }

  fn log(&self, text: &str) {
    self.logged_messages.lock().push(text.to_string());
  }

  fn log_stderr(&self, text: &str) {
    self.logged_stderr_messages.lock().push(text.to_string());
  }

  fn log_level(&self) -> LogLevel {
    self.log_level
  }
}
