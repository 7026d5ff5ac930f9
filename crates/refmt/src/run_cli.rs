use anyhow::bail;
use anyhow::Result;
use refmt_core::CodeFormatter;
use refmt_core::Executer;
use refmt_core::FileMatcher;

use crate::adapter::FormatterAdapter;
use crate::arg_parser::CliArgs;
use crate::configuration;
use crate::configuration::CONFIG_FILE_NAME;
use crate::environment::Environment;
use crate::formatters::CommandFormatter;
use crate::formatters::CommandFormatterOptions;
use crate::queue::ReformatQueue;

pub fn run_cli(args: &CliArgs, environment: &impl Environment, executer: Box<dyn Executer>) -> Result<()> {
  let config = configuration::resolve_configuration(environment, args.config.as_deref())?;

  let mask_list = args.file_masks.clone().or(config.file_masks).unwrap_or_default();
  let matcher = FileMatcher::from_mask_list(&mask_list);
  if matcher.is_empty() {
    bail!("No file masks are configured. Specify --masks or add \"fileMasks\" to {}.", CONFIG_FILE_NAME);
  }

  let options = CommandFormatterOptions {
    matcher,
    file_command: args.file_command.clone().or(config.file_command),
    directory_command: args.directory_command.clone().or(config.directory_command),
    recursive_command: args.recursive_command.clone().or(config.recursive_command),
  };
  if options.file_command.is_none() && options.directory_command.is_none() && options.recursive_command.is_none() {
    bail!(
      "No formatter commands are configured. Specify --file-command, --dir-command or --recursive-command, or add them to {}.",
      CONFIG_FILE_NAME,
    );
  }

  // the queue batches over the formatter's native granularities on flush;
  // the adapter layered over it turns each path argument into single-file
  // enqueues, decomposing directory arguments
  let formatter = CommandFormatter::new(executer, options)?;
  let mut queue = ReformatQueue::new(environment.clone(), Box::new(formatter));
  let mut adapter = FormatterAdapter::new(environment.clone(), &mut queue);

  let cwd = environment.cwd()?;
  for file_path in &args.file_paths {
    // joining an absolute path replaces the cwd
    let file_path = environment.canonicalize(&cwd.join(file_path))?;
    if environment.path_is_directory(file_path.as_ref()) {
      adapter.format_recursive(&file_path)?;
    } else {
      adapter.format_one(&file_path)?;
    }
  }

  let count = queue.len();
  queue.flush()?;

  environment.log(&format!("Reformatted {} {}.", count, if count == 1 { "file" } else { "files" }));
  Ok(())
}
