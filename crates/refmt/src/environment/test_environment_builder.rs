use std::path::Path;

use super::Environment;
use super::TestEnvironment;

/// Builds up an in-memory directory tree for a test.
pub struct TestEnvironmentBuilder {
  environment: TestEnvironment,
}

impl TestEnvironmentBuilder {
  pub fn new() -> TestEnvironmentBuilder {
    TestEnvironmentBuilder {
      environment: TestEnvironment::new(),
    }
  }

  pub fn write_file(self, file_path: impl AsRef<Path>) -> Self {
    self.environment.write_file(file_path.as_ref(), "").unwrap();
    self
  }

  pub fn mk_dir(self, dir_path: impl AsRef<Path>) -> Self {
    self.environment.mk_dir_all(dir_path.as_ref()).unwrap();
    self
  }

  pub fn build(&self) -> TestEnvironment {
    self.environment.clone()
  }
}
