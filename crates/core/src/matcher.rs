use std::path::Path;

/// Matches file names against a set of glob-style masks where `*` is the
/// only wildcard and matches zero or more characters.
///
/// Comparison is case-insensitive and only ever against a file's base name,
/// never its full path. Zero masks match nothing. Masks are trimmed, so an
/// empty or whitespace-only mask is accepted as configuration input but can
/// never match a real file name.
#[derive(Debug, Clone)]
pub struct FileMatcher {
  masks: Vec<MaskPattern>,
}

impl FileMatcher {
  pub fn new(masks: impl IntoIterator<Item = impl AsRef<str>>) -> FileMatcher {
    FileMatcher {
      masks: masks.into_iter().filter_map(|mask| MaskPattern::parse(mask.as_ref())).collect(),
    }
  }

  /// Parses a `;` or `,` separated mask list (ex. `"*.rs; *.toml"`).
  pub fn from_mask_list(mask_list: &str) -> FileMatcher {
    FileMatcher::new(mask_list.split([';', ',']))
  }

  pub fn is_empty(&self) -> bool {
    self.masks.is_empty()
  }

  /// True when the file's base name matches at least one mask.
  pub fn matches(&self, file_path: &Path) -> bool {
    let Some(file_name) = file_path.file_name().and_then(|name| name.to_str()) else {
      return false;
    };
    let file_name = file_name.to_lowercase();
    self.masks.iter().any(|mask| mask.matches(&file_name))
  }
}

/// One lowercased mask, stored as the literal runs around its `*`s.
#[derive(Debug, Clone)]
struct MaskPattern {
  tokens: Vec<String>,
}

impl MaskPattern {
  fn parse(mask: &str) -> Option<MaskPattern> {
    let mask = mask.trim();
    if mask.is_empty() {
      return None;
    }
    Some(MaskPattern {
      tokens: mask.to_lowercase().split('*').map(String::from).collect(),
    })
  }

  fn matches(&self, file_name: &str) -> bool {
    if self.tokens.len() == 1 {
      // no wildcard in the mask
      return file_name == self.tokens[0];
    }

    // anchor the first token at the start and the last at the end, then
    // consume the middle tokens left to right
    let first = &self.tokens[0];
    let last = &self.tokens[self.tokens.len() - 1];
    let Some(remaining) = file_name.strip_prefix(first.as_str()) else {
      return false;
    };
    let Some(mut remaining) = remaining.strip_suffix(last.as_str()) else {
      return false;
    };
    for token in &self.tokens[1..self.tokens.len() - 1] {
      if token.is_empty() {
        continue; // consecutive wildcards
      }
      match remaining.find(token.as_str()) {
        Some(index) => remaining = &remaining[index + token.len()..],
        None => return false,
      }
    }
    true
  }
}
