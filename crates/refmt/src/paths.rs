use std::path::Path;

use anyhow::Result;
use refmt_core::CanonicalizedPathBuf;

use crate::environment::Environment;

/// Immediate child regular files of a directory whose names satisfy the
/// predicate. Subdirectories are not entered.
pub fn matching_files_in_dir(environment: &impl Environment, dir_path: &CanonicalizedPathBuf, is_match: &dyn Fn(&Path) -> bool) -> Result<Vec<CanonicalizedPathBuf>> {
  let mut result = Vec::new();
  for child_path in environment.dir_children(dir_path.as_ref())? {
    if environment.path_is_file(&child_path) && is_match(&child_path) {
      result.push(CanonicalizedPathBuf::new(child_path));
    }
  }
  Ok(result)
}

/// Every regular file in the directory's tree whose name satisfies the
/// predicate.
pub fn matching_files_in_tree(environment: &impl Environment, dir_path: &CanonicalizedPathBuf, is_match: &dyn Fn(&Path) -> bool) -> Result<Vec<CanonicalizedPathBuf>> {
  let mut result = Vec::new();
  for child_path in environment.dir_children(dir_path.as_ref())? {
    if environment.path_is_file(&child_path) {
      if is_match(&child_path) {
        result.push(CanonicalizedPathBuf::new(child_path));
      }
    } else if environment.path_is_directory(&child_path) {
      result.extend(matching_files_in_tree(environment, &CanonicalizedPathBuf::new(child_path), is_match)?);
    }
  }
  Ok(result)
}

/// Immediate child subdirectories of a directory.
pub fn child_directories(environment: &impl Environment, dir_path: &CanonicalizedPathBuf) -> Result<Vec<CanonicalizedPathBuf>> {
  let mut result = Vec::new();
  for child_path in environment.dir_children(dir_path.as_ref())? {
    if environment.path_is_directory(&child_path) {
      result.push(CanonicalizedPathBuf::new(child_path));
    }
  }
  Ok(result)
}

/// The nearest directory that is an ancestor of every file in the set.
///
/// Total for every non-empty set: starting from the first file's parent, it
/// ascends one component at a time until the candidate contains every file,
/// terminating at the file system root at the latest. `None` for an empty
/// set, or when the files share no root (ex. different Windows drives).
pub fn common_ancestor(file_paths: &[CanonicalizedPathBuf]) -> Option<CanonicalizedPathBuf> {
  let first = file_paths.first()?;
  let mut candidate = first.parent()?;
  loop {
    if file_paths.iter().all(|file_path| file_path.starts_with(&candidate)) {
      return Some(candidate);
    }
    candidate = candidate.parent()?;
  }
}
