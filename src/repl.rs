//! The interactive read-evaluate-print loop.

use crate::commands::{Dispatcher, GOODBYE};
use crate::directory::Directory;
use crate::storage::ContactStore;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{error, info};

/// Banner printed once at startup.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before every command.
pub const PROMPT: &str = "Enter a command: ";

/// Run the command loop until `close`/`exit` or end of input.
///
/// Reads one command per line from `input` and writes all replies to
/// `output`; diagnostics go to the logger only. The directory is
/// snapshotted through `store` after every mutating command and on the
/// way out, and a snapshot failure never ends the session.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    directory: &mut Directory,
    store: &ContactStore,
    dispatcher: &Dispatcher,
) -> Result<()> {
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like `exit`: persist and leave cleanly.
            info!("end of input, closing");
            persist(store, directory, &mut output)?;
            writeln!(output, "{}", GOODBYE)?;
            return Ok(());
        }

        let today = chrono::Local::now().date_naive();
        let Some(dispatch) = dispatcher.dispatch(&line, directory, today) else {
            continue;
        };

        writeln!(output, "{}", dispatch.reply)?;
        if dispatch.persist {
            persist(store, directory, &mut output)?;
        }
        if dispatch.terminal {
            return Ok(());
        }
    }
}

/// Snapshot the directory; report a failure without ending the session.
fn persist<W: Write>(store: &ContactStore, directory: &Directory, output: &mut W) -> Result<()> {
    if let Err(err) = store.save(directory) {
        error!(error = %err, path = %store.path().display(), "failed to save contacts");
        writeln!(output, "Warning: could not save contacts: {}", err)?;
    }
    Ok(())
}
