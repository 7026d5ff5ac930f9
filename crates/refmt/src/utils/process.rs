use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::process::Command;
use std::process::Stdio;
use std::thread;
use std::thread::JoinHandle;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use refmt_core::Executer;

use crate::environment::Environment;

/// Spawns formatter processes, draining their output on dedicated
/// background threads so a chatty formatter cannot fill a pipe and stall.
/// The threads are owned per invocation; callers only wait for `execute`
/// to return.
pub struct RealExecuter<TEnvironment: Environment> {
  environment: TEnvironment,
}

impl<TEnvironment: Environment> RealExecuter<TEnvironment> {
  pub fn new(environment: TEnvironment) -> RealExecuter<TEnvironment> {
    RealExecuter { environment }
  }
}

impl<TEnvironment: Environment> Executer for RealExecuter<TEnvironment> {
  fn execute(&self, args: &[String]) -> Result<()> {
    let Some((program, program_args)) = args.split_first() else {
      bail!("Cannot execute an empty command.");
    };
    log_debug!(self.environment, "Executing: {}", args.join(" "));

    let mut child = Command::new(program)
      .args(program_args)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .with_context(|| format!("Could not start {}", program))?;

    let stdout_thread = child.stdout.take().map(|stdout| spawn_output_thread(self.environment.clone(), stdout, false));
    let stderr_thread = child.stderr.take().map(|stderr| spawn_output_thread(self.environment.clone(), stderr, true));
    let status = child.wait().with_context(|| format!("Failed waiting on {}", program))?;
    if let Some(handle) = stdout_thread {
      let _ = handle.join();
    }
    if let Some(handle) = stderr_thread {
      let _ = handle.join();
    }

    if !status.success() {
      bail!("Command {} failed ({})", program, status);
    }
    Ok(())
  }
}

fn spawn_output_thread<TEnvironment: Environment>(environment: TEnvironment, reader: impl Read + Send + 'static, is_stderr: bool) -> JoinHandle<()> {
  thread::spawn(move || {
    for line in BufReader::new(reader).lines() {
      let Ok(line) = line else {
        return;
      };
      if is_stderr {
        environment.log_stderr(&line);
      } else {
        environment.log(&line);
      }
    }
  })
}
