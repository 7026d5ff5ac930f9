use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use refmt_core::CanonicalizedPathBuf;
use refmt_core::CodeFormatter;
use refmt_core::Executer;
use refmt_core::FileMatcher;
use refmt_core::FormatError;
use refmt_core::Granularity;

use crate::utils::split_command_line;

pub struct CommandFormatterOptions {
  pub matcher: FileMatcher,
  pub file_command: Option<String>,
  pub directory_command: Option<String>,
  pub recursive_command: Option<String>,
}

/// Formats by running user-configured commands.
///
/// Which granularities are supported follows from which command templates
/// were configured. A generic command line has no native many-files form;
/// synthesizing that from the single-file command is the adapter's job,
/// not this formatter's.
pub struct CommandFormatter {
  matcher: FileMatcher,
  executer: Box<dyn Executer>,
  file_command: Option<CommandTemplate>,
  directory_command: Option<CommandTemplate>,
  recursive_command: Option<CommandTemplate>,
}

impl CommandFormatter {
  pub fn new(executer: Box<dyn Executer>, options: CommandFormatterOptions) -> Result<CommandFormatter> {
    Ok(CommandFormatter {
      matcher: options.matcher,
      executer,
      file_command: parse_template(options.file_command)?,
      directory_command: parse_template(options.directory_command)?,
      recursive_command: parse_template(options.recursive_command)?,
    })
  }

  fn run(&self, template: &Option<CommandTemplate>, granularity: Granularity, path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    let Some(template) = template else {
      return Err(FormatError::Unsupported(granularity));
    };
    self.executer.execute(&template.to_args(path.as_ref()))?;
    Ok(())
  }
}

fn parse_template(text: Option<String>) -> Result<Option<CommandTemplate>> {
  match text {
    Some(text) => Ok(Some(CommandTemplate::parse(&text)?)),
    None => Ok(None),
  }
}

/// A parsed command line whose `{}` argument stands for the target path.
struct CommandTemplate {
  args: Vec<String>,
}

impl CommandTemplate {
  fn parse(text: &str) -> Result<CommandTemplate> {
    let args = split_command_line(text).with_context(|| format!("Invalid formatter command: {}", text))?;
    Ok(CommandTemplate { args })
  }

  /// Substitutes the target path for the `{}` argument, appending the path
  /// when the template has no placeholder.
  fn to_args(&self, path: &Path) -> Vec<String> {
    let path_text = path.to_string_lossy().into_owned();
    let mut result = Vec::with_capacity(self.args.len() + 1);
    let mut substituted = false;
    for arg in &self.args {
      if arg == "{}" {
        result.push(path_text.clone());
        substituted = true;
      } else {
        result.push(arg.clone());
      }
    }
    if !substituted {
      result.push(path_text);
    }
    result
  }
}

impl CodeFormatter for CommandFormatter {
  fn supports_file_type(&self, file_path: &Path) -> bool {
    self.matcher.matches(file_path)
  }

  fn supports_one_file(&self) -> bool {
    self.file_command.is_some()
  }

  fn supports_many_files(&self) -> bool {
    false
  }

  fn supports_directory(&self) -> bool {
    self.directory_command.is_some()
  }

  fn supports_recursive(&self) -> bool {
    self.recursive_command.is_some()
  }

  fn format_one(&mut self, file_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    self.run(&self.file_command, Granularity::OneFile, file_path)
  }

  fn format_many(&mut self, _file_paths: &[CanonicalizedPathBuf]) -> Result<(), FormatError> {
    Err(FormatError::Unsupported(Granularity::ManyFiles))
  }

  fn format_directory(&mut self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    self.run(&self.directory_command, Granularity::Directory, dir_path)
  }

  fn format_recursive(&mut self, dir_path: &CanonicalizedPathBuf) -> Result<(), FormatError> {
    self.run(&self.recursive_command, Granularity::Recursive, dir_path)
  }
}
