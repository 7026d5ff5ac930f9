use std::cell::RefCell;
use std::path::Path;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use refmt_core::CanonicalizedPathBuf;
use refmt_core::CodeFormatter;
use refmt_core::Executer;
use refmt_core::FileMatcher;
use refmt_core::FormatError;
use refmt_core::Granularity;

/// One formatter invocation as the engine issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterCall {
  One(PathBuf),
  Many(Vec<PathBuf>),
  Directory(PathBuf),
  Recursive(PathBuf),
}

/// Shared, inspectable log of the calls a [`TestFormatter`] received.
#[derive(Default, Clone)]
pub struct FormatterCallLog {
  calls: Rc<RefCell<Vec<FormatterCall>>>,
}

impl FormatterCallLog {
  pub fn take(&self) -> Vec<FormatterCall> {
    self.calls.borrow_mut().drain(..).collect()
  }

  fn push(&self, call: FormatterCall) {
    self.calls.borrow_mut().push(call);
  }
}

/// Formatter test double with configurable support flags. Operations
/// invoked while unsupported fail the same way a real formatter must.
pub struct TestFormatter {
  matcher: FileMatcher,
  supports_one: bool,
  supports_many: bool,
  supports_directory: bool,
  supports_recursive: bool,
  call_log: FormatterCallLog,
}

impl TestFormatter {
  pub fn new(mask_list: &str) -> TestFormatter {
    TestFormatter {
      matcher: FileMatcher::from_mask_list(mask_list),
      supports_one: false,
      supports_many: false,
      supports_directory: false,
      supports_recursive: false,
      call_log: Default::default(),
    }
  }

  pub fn with_one_file(mut self) -> Self {
    self.supports_one = true;
    self
  }

  pub fn with_many_files(mut self) -> Self {
    self.supports_many = true;
    self
  }

  pub fn with_directory(mut self) -> Self {
    self.supports_directory = true;
    self
  }

  pub fn with_recursive(mut self) -> Self {
    self.supports_recursive = true;
    self
  }

  pub fn call_log(&self) -> FormatterCallLog {
    self.call_log.clone()
  }
}

impl CodeFormatter for TestFormatter {
  fn supports_file_type(&self, file_path: &Path) -> bool {
    self.matcher.matches(file_path)
  }

  fn supports_one_file(&self) -> bool {
    self.supports_one
  }

  fn supports_many_files(&self) -> bool {
    self.supports_many
  }

  fn supports_directory(&self) -> bool {
    self.supports_directory
  }

  fn supports_recursive(&self) -> bool {
    self.supports_recursive
  }

  fn format_one(&mut self, file_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    if !self.supports_one {
      return Err(FormatError::Unsupported(Granularity::OneFile));
    }
    self.call_log.push(FormatterCall::One(file_path.as_ref().to_path_buf()));
    Ok(())
  }

  fn format_many(&mut self, file_paths: &[CanonicalizedPathBuf]) -> Result<(), FormatError> {
    if !self.supports_many {
      return Err(FormatError::Unsupported(Granularity::ManyFiles));
    }
    self.call_log.push(FormatterCall::Many(file_paths.iter().map(|p| p.as_ref().to_path_buf()).collect()));
    Ok(())
  }

  fn format_directory(&mut self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    if !self.supports_directory {
      return Err(FormatError::Unsupported(Granularity::Directory));
    }
    self.call_log.push(FormatterCall::Directory(dir_path.as_ref().to_path_buf()));
    Ok(())
  }

  fn format_recursive(&mut self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    if !self.supports_recursive {
      return Err(FormatError::Unsupported(Granularity::Recursive));
    }
    self.call_log.push(FormatterCall::Recursive(dir_path.as_ref().to_path_buf()));
    Ok(())
  }
}

/// Executer test double recording each spawned command line.
#[derive(Default, Clone)]
pub struct TestExecuter {
  executions: Rc<RefCell<Vec<Vec<String>>>>,
}

impl TestExecuter {
  pub fn new() -> TestExecuter {
    Default::default()
  }

  pub fn take_executions(&self) -> Vec<Vec<String>> {
    self.executions.borrow_mut().drain(..).collect()
  }
}

impl Executer for TestExecuter {
  fn execute(&self, args: &[String]) -> Result<()> {
    self.executions.borrow_mut().push(args.to_vec());
    Ok(())
  }
}
