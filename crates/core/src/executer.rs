use anyhow::Result;

/// Process-spawning capability used by formatters that shell out.
///
/// Implementations own any output redirection for the spawned process;
/// callers only observe the blocking result of the invocation. Instances
/// are constructed and owned by their caller rather than living in global
/// state.
pub trait Executer {
  fn execute(&self, args: &[String]) -> Result<()>;
}
