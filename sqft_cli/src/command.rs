//! Worksheet commands typed at the prompt.
//!
//! ```text
//! h <row> [inches]    set height (omit the value to clear it)
//! w <row> [inches]    set width
//! d <row>             delete a row
//! rearm on|off        re-arm the last row after the armed row is deleted
//! show                print the table
//! json                print the JSON snapshot
//! help                list commands
//! quit                leave
//! ```

use std::str::FromStr;

use sqft_core::{Field, RowId, SheetError, SheetResult};

pub const HELP: &str = "\
Commands:
  h <row> [inches]   set height (omit the value to clear it)
  w <row> [inches]   set width
  d <row>            delete a row
  rearm on|off       re-arm the last row after the armed row is deleted
  show               print the table
  json               print the JSON snapshot
  help               list commands
  quit               leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Edit { id: RowId, field: Field, value: String },
    Delete(RowId),
    Rearm(bool),
    Show,
    Json,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

impl FromStr for Command {
    type Err = SheetError;

    fn from_str(line: &str) -> SheetResult<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Nothing);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "show" | "s" | "ls" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            "d" | "del" | "delete" => Command::Delete(row_arg(name, words.next())?),
            "rearm" => Command::Rearm(switch_arg(name, words.next())?),
            other => {
                let field: Field = other
                    .parse()
                    .map_err(|_| SheetError::invalid_command(name))?;
                let id = row_arg(name, words.next())?;
                let value = words.next().unwrap_or_default().to_string();
                Command::Edit { id, field, value }
            }
        };

        if let Some(extra) = words.next() {
            return Err(SheetError::invalid_command(format!("{} ... {}", name, extra)));
        }
        Ok(command)
    }
}

fn row_arg(command: &str, word: Option<&str>) -> SheetResult<RowId> {
    word.ok_or_else(|| SheetError::missing_argument(command, "row"))?
        .parse()
}

fn switch_arg(command: &str, word: Option<&str>) -> SheetResult<bool> {
    let word = word.ok_or_else(|| SheetError::missing_argument(command, "on|off"))?;
    match word.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(SheetError::invalid_command(format!("{} {}", command, word))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SheetResult<Command> {
        line.parse()
    }

    #[test]
    fn test_edit() {
        assert_eq!(
            parse("h 1 36").unwrap(),
            Command::Edit {
                id: RowId(1),
                field: Field::Height,
                value: "36".to_string(),
            }
        );
        assert_eq!(
            parse("width row-3 12.5").unwrap(),
            Command::Edit {
                id: RowId(3),
                field: Field::Width,
                value: "12.5".to_string(),
            }
        );
    }

    #[test]
    fn test_edit_without_value_clears() {
        assert_eq!(
            parse("w 2").unwrap(),
            Command::Edit {
                id: RowId(2),
                field: Field::Width,
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_non_numeric_value_is_kept_verbatim() {
        // Coercion happens in the worksheet, not here
        let Command::Edit { value, .. } = parse("h 1 abc").unwrap() else {
            panic!("expected edit");
        };
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_delete() {
        assert_eq!(parse("d 4").unwrap(), Command::Delete(RowId(4)));
        assert_eq!(parse("DELETE #5").unwrap(), Command::Delete(RowId(5)));
    }

    #[test]
    fn test_rearm() {
        assert_eq!(parse("rearm on").unwrap(), Command::Rearm(true));
        assert_eq!(parse("REARM Off").unwrap(), Command::Rearm(false));
        assert_eq!(parse("rearm").unwrap_err().error_code(), "MISSING_ARGUMENT");
        assert_eq!(parse("rearm maybe").unwrap_err().error_code(), "INVALID_COMMAND");
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("show").unwrap(), Command::Show);
        assert_eq!(parse("json").unwrap(), Command::Json);
        assert_eq!(parse("?").unwrap(), Command::Help);
        assert_eq!(parse("q").unwrap(), Command::Quit);
        assert_eq!(parse("   ").unwrap(), Command::Nothing);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse("zap 1").unwrap_err().error_code(), "INVALID_COMMAND");
        assert_eq!(parse("d").unwrap_err().error_code(), "MISSING_ARGUMENT");
        assert_eq!(parse("h x 3").unwrap_err().error_code(), "INVALID_ROW_ID");
        assert_eq!(parse("h 1 3 4").unwrap_err().error_code(), "INVALID_COMMAND");
        assert_eq!(parse("show all").unwrap_err().error_code(), "INVALID_COMMAND");
    }
}
