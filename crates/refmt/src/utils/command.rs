use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandSplitError {
  #[error("The command is empty.")]
  Empty,
  #[error("Missing a closing {0} character.")]
  UnterminatedQuote(char),
}

/// Splits a command template into its arguments, honoring single quotes
/// (literal), double quotes, and backslash escapes outside single quotes.
pub fn split_command_line(input: &str) -> Result<Vec<String>, CommandSplitError> {
  let mut args = Vec::new();
  let mut current = String::new();
  let mut quote: Option<char> = None;
  let mut chars = input.chars();

  while let Some(c) = chars.next() {
    match quote {
      Some('\'') => {
        if c == '\'' {
          quote = None;
        } else {
          current.push(c);
        }
      }
      Some(_) => match c {
        '"' => quote = None,
        '\\' => current.push(chars.next().unwrap_or('\\')),
        _ => current.push(c),
      },
      None => match c {
        c if c.is_whitespace() => {
          if !current.is_empty() {
            args.push(std::mem::take(&mut current));
          }
        }
        '\'' | '"' => quote = Some(c),
        '\\' => current.push(chars.next().unwrap_or('\\')),
        _ => current.push(c),
      },
    }
  }

  if let Some(quote) = quote {
    return Err(CommandSplitError::UnterminatedQuote(quote));
  }
  if !current.is_empty() {
    args.push(current);
  }
  if args.is_empty() {
    return Err(CommandSplitError::Empty);
  }
  Ok(args)
}
