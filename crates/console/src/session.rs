//! Interactive feedback triage session.
//!
//! Opens the feedback panel, then reads commands from stdin until the
//! user quits:
//!
//! ```text
//! search <term>   keep departments whose name contains <term>
//! clear           drop the department filter
//! delete <id>     delete one feedback record
//! quit            close the panel and leave
//! ```

use tokio::io::{AsyncBufReadExt, BufReader};

use caredesk_dashboard::Dashboard;

use crate::render;

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Clear,
    Delete(String),
    Quit,
    Unknown(String),
}

/// Parse a trimmed, non-empty input line.
pub fn parse_command(line: &str) -> SessionCommand {
    match line.split_once(char::is_whitespace) {
        Some(("search", term)) => SessionCommand::Search(term.trim().to_string()),
        Some(("delete", id)) => SessionCommand::Delete(id.trim().to_string()),
        None if line == "clear" => SessionCommand::Clear,
        None if line == "quit" || line == "q" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(line.to_string()),
    }
}

/// Run the triage session until quit or end of input.
///
/// If the opening fetch fails the panel stays closed and the session
/// ends immediately; the failure itself is only logged, per the
/// keep-last-value policy.
pub async fn run(dashboard: &mut Dashboard) {
    dashboard.open_feedback_panel().await;
    if !dashboard.state().triage.panel_open {
        return;
    }
    print_panel(dashboard);
    println!("commands: search <term> | clear | delete <id> | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if !handle_command(dashboard, parse_command(line)).await {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read from stdin");
                break;
            }
        }
    }
    dashboard.close_feedback_panel().await;
}

/// Apply one command. Returns `false` when the session should end.
async fn handle_command(dashboard: &mut Dashboard, command: SessionCommand) -> bool {
    match command {
        SessionCommand::Search(term) => {
            dashboard.search_feedback(&term).await;
            print_panel(dashboard);
        }
        SessionCommand::Clear => {
            dashboard.search_feedback("").await;
            print_panel(dashboard);
        }
        SessionCommand::Delete(id) => {
            dashboard.delete_feedback(&id).await;
            print_panel(dashboard);
        }
        SessionCommand::Quit => return false,
        SessionCommand::Unknown(line) => {
            println!("Unknown command: {line}");
        }
    }
    true
}

fn print_panel(dashboard: &Dashboard) {
    if let Some(view) = dashboard.view() {
        print!("{}", render::feedback_panel(&view));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_term() {
        assert_eq!(
            parse_command("search cardio"),
            SessionCommand::Search("cardio".to_string())
        );
    }

    #[test]
    fn parses_search_term_with_surrounding_spaces() {
        assert_eq!(
            parse_command("search   cardio "),
            SessionCommand::Search("cardio".to_string())
        );
    }

    #[test]
    fn parses_delete_with_id() {
        assert_eq!(
            parse_command("delete fb-2"),
            SessionCommand::Delete("fb-2".to_string())
        );
    }

    #[test]
    fn parses_clear_and_quit() {
        assert_eq!(parse_command("clear"), SessionCommand::Clear);
        assert_eq!(parse_command("quit"), SessionCommand::Quit);
        assert_eq!(parse_command("q"), SessionCommand::Quit);
    }

    #[test]
    fn bare_search_is_unknown() {
        assert_eq!(
            parse_command("search"),
            SessionCommand::Unknown("search".to_string())
        );
    }

    #[test]
    fn unrecognized_input_is_unknown() {
        assert_eq!(
            parse_command("open sesame"),
            SessionCommand::Unknown("open sesame".to_string())
        );
    }
}
