#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]

#[macro_use]
mod environment;

mod adapter;
mod arg_parser;
mod configuration;
mod formatters;
mod paths;
mod queue;
mod run_cli;
mod utils;

#[cfg(test)]
mod test_helpers;

use environment::Environment;
use environment::RealEnvironment;
use utils::RealExecuter;

fn main() {
  let args = match arg_parser::parse_args(std::env::args().collect()) {
    Ok(args) => args,
    // clap prints help and version output itself
    Err(err) => err.exit(),
  };

  let environment = RealEnvironment::new(args.log_level);
  let executer = RealExecuter::new(environment.clone());
  if let Err(err) = run_cli::run_cli(&args, &environment, Box::new(executer)) {
    environment.log_stderr(&format!("{:#}", err));
    std::process::exit(1);
  }
}
