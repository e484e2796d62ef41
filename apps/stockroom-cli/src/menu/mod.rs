//! # Menus
//!
//! One interactive loop per record-keeping variant.
//!
//! ## Loop Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         run_loop                                        │
//! │                                                                         │
//! │   print numbered options ──► "Select option: " ──► dispatch(choice)    │
//! │        ▲                                               │                │
//! │        │          Ok(Continue) / recoverable error     │                │
//! │        └───────────────────────────────────────────────┤                │
//! │                                                        │                │
//! │                 Ok(Exit) / EndOfInput ──► return Ok(())                 │
//! │                 fatal error           ──► return Err                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod clinic;
pub mod inventory;
pub mod warehouse;

use std::io::{BufRead, Write};

use tracing::warn;

use crate::console::Console;
use crate::error::{AppError, AppResult};

pub use clinic::ClinicMenu;
pub use inventory::InventoryMenu;
pub use warehouse::WarehouseMenu;

/// What the loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs a numbered menu until the user exits or input ends.
pub(crate) fn run_loop<R, W, F>(
    console: &mut Console<R, W>,
    options: &[&str],
    mut dispatch: F,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut Console<R, W>, &str) -> AppResult<Flow>,
{
    loop {
        console.say("")?;
        for (number, option) in options.iter().enumerate() {
            console.say(format_args!("{}. {}", number + 1, option))?;
        }

        let choice = match console.ask("Select option: ") {
            Ok(choice) => choice,
            Err(AppError::EndOfInput) => return Ok(()),
            Err(err) => return Err(err),
        };

        match dispatch(console, choice.trim()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) | Err(AppError::EndOfInput) => return Ok(()),
            Err(err) if err.is_fatal() => return Err(err),
            Err(AppError::InvalidInput(field)) => {
                warn!(field, "Unparsable input");
                console.say("Invalid input format!")?;
            }
            Err(err) => {
                warn!(code = err.code(), error = %err, "Action failed");
                console.say(format_args!("Error: {err}"))?;
            }
        }
    }
}

/// Reply for a choice that matches no option.
pub(crate) fn invalid_option<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<Flow> {
    console.say("Invalid option!")?;
    Ok(Flow::Continue)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io::Cursor;

    use crate::console::Console;

    pub type ScriptConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    /// A console fed from `lines`, one entry per typed line.
    pub fn scripted(lines: &[&str]) -> ScriptConsole {
        let mut script = lines.join("\n");
        script.push('\n');
        Console::new(Cursor::new(script.into_bytes()), Vec::new())
    }

    pub fn transcript(console: ScriptConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }
}
