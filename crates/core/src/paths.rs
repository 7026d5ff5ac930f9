use std::path::Display;
use std::path::Path;
use std::path::PathBuf;

/// A PathBuf that is guaranteed to be canonicalized.
///
/// Two references to the same file always compare equal, so these are safe
/// to collect into sets and compare against directory listings. Construct
/// them through an environment's `canonicalize` rather than directly; the
/// direct constructor is for paths that are already canonical, such as the
/// children of a canonical directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalizedPathBuf {
  path: PathBuf,
}

impl CanonicalizedPathBuf {
  /// The caller asserts the provided path is already canonical.
  pub fn new(path: PathBuf) -> Self {
    CanonicalizedPathBuf { path }
  }

  pub fn into_path_buf(self) -> PathBuf {
    self.path
  }

  pub fn display(&self) -> Display<'_> {
    self.path.display()
  }

  pub fn parent(&self) -> Option<CanonicalizedPathBuf> {
    self.path.parent().map(|p| CanonicalizedPathBuf::new(p.to_path_buf()))
  }

  /// True when `other` is this path or one of its ancestor directories.
  pub fn starts_with(&self, other: &CanonicalizedPathBuf) -> bool {
    self.path.starts_with(&other.path)
  }
}

impl AsRef<Path> for CanonicalizedPathBuf {
  fn as_ref(&self) -> &Path {
    self.path.as_path()
  }
}
