//! Command parsing and dispatch.
//!
//! Input lines are split on whitespace; the first token selects the
//! command, the rest are positional arguments (no quoting, no escaping).
//! Handlers return `Result<String, CommandError>` and a single adapter at
//! the dispatch boundary renders failures as their message text, so no
//! operation error ever propagates past this module.

mod handlers;

use crate::directory::Directory;
use crate::error::CommandResult;
use chrono::NaiveDate;
use tracing::debug;

/// Reply to `hello`.
pub const GREETING: &str = "How can I help you?";

/// Reply to `close`/`exit` (and end of input).
pub const GOODBYE: &str = "Good bye!";

/// Reply to anything unrecognized.
pub const INVALID_COMMAND: &str = "Invalid command.";

/// The outcome of one dispatched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Text to print for the user
    pub reply: String,

    /// Whether the directory may have changed and should be snapshotted
    pub persist: bool,

    /// Whether the session ends after this reply
    pub terminal: bool,
}

impl Dispatch {
    fn reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            persist: false,
            terminal: false,
        }
    }

    fn mutating(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            persist: true,
            terminal: false,
        }
    }

    fn closing(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            persist: true,
            terminal: true,
        }
    }
}

/// Routes input lines to handlers and renders their outcome.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    birthday_horizon_days: u64,
}

impl Dispatcher {
    /// Create a dispatcher with the given `birthdays` lookahead window.
    pub fn new(birthday_horizon_days: u64) -> Self {
        Self {
            birthday_horizon_days,
        }
    }

    /// Parse and execute one input line against the directory.
    ///
    /// `today` anchors the birthday computations. Returns `None` for a
    /// blank line (the loop just reprompts).
    pub fn dispatch(
        &self,
        line: &str,
        directory: &mut Directory,
        today: NaiveDate,
    ) -> Option<Dispatch> {
        let mut tokens = line.split_whitespace();
        let command = tokens.next()?;
        let args: Vec<&str> = tokens.collect();
        debug!(command, args = args.len(), "dispatching");

        let dispatch = match command {
            "hello" => Dispatch::reply(GREETING),
            "add" => Dispatch::mutating(render(handlers::add_contact(&args, directory))),
            "change" => Dispatch::mutating(render(handlers::change_phone(&args, directory))),
            "phone" => Dispatch::reply(render(handlers::show_phones(&args, directory))),
            "all" => Dispatch::reply(handlers::list_all(directory)),
            "add-birthday" => {
                Dispatch::mutating(render(handlers::add_birthday(&args, directory)))
            }
            "show-birthday" => Dispatch::reply(render(handlers::show_birthday(&args, directory))),
            "birthdays" => Dispatch::reply(handlers::upcoming_birthdays(
                directory,
                today,
                self.birthday_horizon_days,
            )),
            "close" | "exit" => Dispatch::closing(GOODBYE),
            _ => Dispatch::reply(INVALID_COMMAND),
        };
        Some(dispatch)
    }
}

/// The uniform error adapter: a failed operation renders as its message
/// text. Applied identically to every command.
fn render(result: CommandResult<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(err) => err.to_string(),
    }
}
