use clap::Arg;
use clap::ArgAction;
use clap::Command;

use crate::utils::LogLevel;

#[derive(Debug, PartialEq, Eq)]
pub struct CliArgs {
  pub file_paths: Vec<String>,
  pub config: Option<String>,
  pub file_masks: Option<String>,
  pub file_command: Option<String>,
  pub directory_command: Option<String>,
  pub recursive_command: Option<String>,
  pub log_level: LogLevel,
}

pub fn parse_args(args: Vec<String>) -> Result<CliArgs, clap::Error> {
  let matches = create_cli_parser().try_get_matches_from(args)?;
  Ok(CliArgs {
    file_paths: matches.get_many::<String>("files").map(|values| values.cloned().collect()).unwrap_or_default(),
    config: matches.get_one::<String>("config").cloned(),
    file_masks: matches.get_one::<String>("masks").cloned(),
    file_command: matches.get_one::<String>("file-command").cloned(),
    directory_command: matches.get_one::<String>("dir-command").cloned(),
    recursive_command: matches.get_one::<String>("recursive-command").cloned(),
    log_level: if matches.get_flag("verbose") { LogLevel::Debug } else { LogLevel::Info },
  })
}

fn create_cli_parser() -> Command {
  Command::new("refmt")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Reformats the specified source files through an external formatter, batching the requests into the fewest formatter invocations that touch exactly the specified files.")
    .arg(
      Arg::new("files")
        .help("File or directory paths to reformat. A directory is reformatted recursively.")
        .action(ArgAction::Append)
        .required(true),
    )
    .arg(
      Arg::new("config")
        .long("config")
        .short('c')
        .help("Path to JSON configuration file. Defaults to refmt.json in the current directory when not provided.")
        .value_name("path"),
    )
    .arg(
      Arg::new("masks")
        .long("masks")
        .help("File masks the formatter handles (ex. \"*.rs;*.toml\").")
        .value_name("masks"),
    )
    .arg(
      Arg::new("file-command")
        .long("file-command")
        .help("Command that reformats a single file. A {} argument is replaced with the path; without one the path is appended.")
        .value_name("command"),
    )
    .arg(
      Arg::new("dir-command")
        .long("dir-command")
        .help("Command that reformats the files directly inside a directory.")
        .value_name("command"),
    )
    .arg(
      Arg::new("recursive-command")
        .long("recursive-command")
        .help("Command that reformats a whole directory tree.")
        .value_name("command"),
    )
    .arg(
      Arg::new("verbose")
        .long("verbose")
        .help("Prints additional diagnostic information.")
        .action(ArgAction::SetTrue),
    )
}
