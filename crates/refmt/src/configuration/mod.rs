use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;

use crate::environment::Environment;

pub const CONFIG_FILE_NAME: &str = "refmt.json";

/// User configuration, resolved from `refmt.json` in the current directory
/// when present. Every field may be overridden by a CLI flag.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Configuration {
  /// `;` or `,` separated file masks the formatter handles (ex.
  /// `"*.rs;*.toml"`).
  pub file_masks: Option<String>,
  pub file_command: Option<String>,
  pub directory_command: Option<String>,
  pub recursive_command: Option<String>,
}

/// Reads the configuration from the provided path, or from the default
/// file in the current directory. A missing default file is not an error;
/// a missing explicitly-provided one is.
pub fn resolve_configuration(environment: &impl Environment, config_path: Option<&str>) -> Result<Configuration> {
  let file_path = match config_path {
    Some(path) => Some(PathBuf::from(path)),
    None => {
      let default_path = environment.cwd()?.join(CONFIG_FILE_NAME);
      if environment.path_is_file(&default_path) {
        Some(default_path)
      } else {
        None
      }
    }
  };
  match file_path {
    Some(file_path) => {
      let file_text = environment.read_file(&file_path)?;
      serde_json::from_str(&file_text).with_context(|| format!("Error deserializing {}", file_path.display()))
    }
    None => Ok(Configuration::default()),
  }
}
