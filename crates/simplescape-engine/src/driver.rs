//! Line-oriented input for the session.
//!
//! Each non-empty stdin line is either a keyword or one JSON command in
//! the reducer's wire shape:
//!
//! | Line | Effect |
//! |------|--------|
//! | `save` | Write the game to the configured storage |
//! | `load` | Replace the game with the saved one |
//! | `state` | Print the full state as one JSON line |
//! | `quit` / `exit` | Stop the session and exit |
//! | `{"type": "GAME_TICK"}` etc. | Send the command to the reducer |

use simplescape_types::Command;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Forward to the reducer.
    Command(Command),
    /// Save the game.
    Save,
    /// Load the saved game.
    Load,
    /// Print the state.
    State,
    /// End the session.
    Quit,
}

/// Parse one line. `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Input>, serde_json::Error> {
    let line = line.trim();
    let input = match line {
        "" => return Ok(None),
        "save" => Input::Save,
        "load" => Input::Load,
        "state" => Input::State,
        "quit" | "exit" => Input::Quit,
        json => Input::Command(serde_json::from_str(json)?),
    };
    Ok(Some(input))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use simplescape_types::{Activity, ActivityRequest, Item, TransferAmount, TransferRequest};

    #[test]
    fn keywords() {
        assert_eq!(parse_line("  save \n").unwrap(), Some(Input::Save));
        assert_eq!(parse_line("load").unwrap(), Some(Input::Load));
        assert_eq!(parse_line("state").unwrap(), Some(Input::State));
        assert_eq!(parse_line("exit").unwrap(), Some(Input::Quit));
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn json_commands() {
        assert_eq!(
            parse_line(r#"{"type": "STOP_ACTIVITY"}"#).unwrap(),
            Some(Input::Command(Command::StopActivity))
        );
        assert_eq!(
            parse_line(
                r#"{"type": "START_ACTIVITY", "payload": {"activity": "mining", "resourceKey": "tin"}}"#
            )
            .unwrap(),
            Some(Input::Command(Command::StartActivity(ActivityRequest {
                activity: Activity::Mining,
                monster_key: None,
                resource_key: Some("tin".to_owned()),
            })))
        );
        assert_eq!(
            parse_line(
                r#"{"type": "DEPOSIT_ITEM", "payload": {"itemName": "Logs", "quantity": "all"}}"#
            )
            .unwrap(),
            Some(Input::Command(Command::DepositItem(TransferRequest {
                item_name: Item::Logs,
                quantity: TransferAmount::All,
            })))
        );
    }

    #[test]
    fn unknown_input_is_an_error() {
        assert!(parse_line("dance").is_err());
        assert!(parse_line(r#"{"type": "FLY"}"#).is_err());
    }
}
