use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use refmt_core::CanonicalizedPathBuf;
use refmt_core::CodeFormatter;
use refmt_core::FormatError;
use refmt_core::Granularity;

use crate::environment::Environment;
use crate::paths;

/// Accumulates single-file reformat requests and dispatches them on
/// [`flush`](ReformatQueue::flush) through the fewest formatter calls that
/// touch exactly the requested files.
///
/// A directory-level call is only ever issued when the on-disk membership
/// of that directory (or tree) equals the queued files, because a coarser
/// call on a directory holding an unqueued matching file would reformat a
/// file nobody asked for. That exactness requirement is what the per-pass
/// checks below enforce; it is not an optimization.
pub struct ReformatQueue<TEnvironment: Environment> {
  environment: TEnvironment,
  formatter: Box<dyn CodeFormatter>,
  pending: Vec<CanonicalizedPathBuf>,
}

impl<TEnvironment: Environment> ReformatQueue<TEnvironment> {
  pub fn new(environment: TEnvironment, formatter: Box<dyn CodeFormatter>) -> ReformatQueue<TEnvironment> {
    ReformatQueue {
      environment,
      formatter,
      pending: Vec::new(),
    }
  }

  /// Queues a file whose name the formatter handles. Nothing is read from
  /// the file system and nothing is dispatched until the flush; queueing
  /// the same file twice dispatches it twice.
  pub fn enqueue(&mut self, file_path: CanonicalizedPathBuf) -> Result<(), FormatError> {
    if !self.formatter.supports_file_type(file_path.as_ref()) {
      return Err(FormatError::UnmatchedFileType(file_path.as_ref().to_path_buf()));
    }
    self.pending.push(file_path);
    Ok(())
  }

  pub fn is_empty(&self) -> bool {
    self.pending.is_empty()
  }

  /// Number of pending entries, counting duplicates.
  pub fn len(&self) -> usize {
    self.pending.len()
  }

  /// Partitions the pending files over the formatter's supported
  /// operations and dispatches them, coarsest operation first.
  ///
  /// The pending set is emptied on every exit path. Files no pass could
  /// claim are reported through [`FormatError::Unresolved`] and are not
  /// retried; calls already issued by earlier passes are not undone when a
  /// later pass fails.
  pub fn flush(&mut self) -> Result<(), FormatError> {
    let mut remaining = std::mem::take(&mut self.pending);
    if remaining.is_empty() {
      return Ok(());
    }

    if self.formatter.supports_many_files() {
      log_debug!(self.environment, "Reformatting {} queued files in one call", remaining.len());
      return self.formatter.format_many(&remaining);
    }

    if self.formatter.supports_recursive() {
      self.recursive_pass(&mut remaining)?;
    }
    if !remaining.is_empty() && self.formatter.supports_directory() {
      self.directory_pass(&mut remaining)?;
    }
    if !remaining.is_empty() && self.formatter.supports_one_file() {
      for file_path in remaining.drain(..) {
        self.formatter.format_one(&file_path)?;
      }
    }

    if remaining.is_empty() {
      Ok(())
    } else {
      Err(FormatError::Unresolved(remaining.into_iter().map(|p| p.into_path_buf()).collect()))
    }
  }

  /// Claims every remaining file with one recursive call on their common
  /// ancestor, but only when the queued files are exactly the matching
  /// files of that whole tree.
  fn recursive_pass(&mut self, remaining: &mut Vec<CanonicalizedPathBuf>) -> Result<(), FormatError> {
    let Some(ancestor) = paths::common_ancestor(remaining) else {
      return Ok(());
    };
    let tree_files = paths::matching_files_in_tree(&self.environment, &ancestor, &|path| self.formatter.supports_file_type(path))?;
    if paths_equal(remaining, &tree_files) {
      log_debug!(self.environment, "Reformatting {} recursively for {} queued files", ancestor.display(), remaining.len());
      self.formatter.format_recursive(&ancestor)?;
      remaining.clear();
    }
    Ok(())
  }

  /// Claims each parent-directory group whose queued files are exactly the
  /// matching files of that directory; other groups fall through to the
  /// next pass.
  fn directory_pass(&mut self, remaining: &mut Vec<CanonicalizedPathBuf>) -> Result<(), FormatError> {
    let mut groups: IndexMap<CanonicalizedPathBuf, Vec<CanonicalizedPathBuf>> = IndexMap::new();
    for file_path in remaining.iter() {
      if let Some(parent) = file_path.parent() {
        groups.entry(parent).or_default().push(file_path.clone());
      }
    }

    let mut claimed_dirs = HashSet::new();
    for (dir_path, group) in &groups {
      let dir_files = paths::matching_files_in_dir(&self.environment, dir_path, &|path| self.formatter.supports_file_type(path))?;
      if paths_equal(group, &dir_files) {
        log_debug!(self.environment, "Reformatting {} for {} queued files", dir_path.display(), group.len());
        self.formatter.format_directory(dir_path)?;
        claimed_dirs.insert(dir_path.clone());
      }
    }
    remaining.retain(|file_path| match file_path.parent() {
      Some(parent) => !claimed_dirs.contains(&parent),
      None => true,
    });
    Ok(())
  }
}

/// Order-insensitive set comparison; queued duplicates collapse.
fn paths_equal(requested: &[CanonicalizedPathBuf], on_disk: &[CanonicalizedPathBuf]) -> bool {
  let requested: HashSet<&Path> = requested.iter().map(|p| p.as_ref()).collect();
  let on_disk: HashSet<&Path> = on_disk.iter().map(|p| p.as_ref()).collect();
  requested == on_disk
}

/// The queue accepts work one file at a time; batching is an internal
/// optimization rather than an exposed operation.
impl<TEnvironment: Environment> CodeFormatter for ReformatQueue<TEnvironment> {
  fn supports_file_type(&self, file_path: &Path) -> bool {
    self.formatter.supports_file_type(file_path)
  }

  fn supports_one_file(&self) -> bool {
    true
  }

  fn supports_many_files(&self) -> bool {
    false
  }

  fn supports_directory(&self) -> bool {
    false
  }

  fn supports_recursive(&self) -> bool {
    false
  }

  fn format_one(&mut self, file_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    self.enqueue(file_path.clone())
  }

  fn format_many(&mut self, _file_paths: &[CanonicalizedPathBuf]) -> Result<(), FormatError> {
    Err(FormatError::Unsupported(Granularity::ManyFiles))
  }

  fn format_directory(&mut self, _dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    Err(FormatError::Unsupported(Granularity::Directory))
  }

  fn format_recursive(&mut self, _dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    Err(FormatError::Unsupported(Granularity::Recursive))
  }
}
