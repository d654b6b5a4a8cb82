//! Terminal presentation shared by the chat REPL and the commands.

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// Whether the user backed out of a prompt (Escape or Ctrl+C).
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Turns a prompt result into `None` when the user backed out of it.
///
/// Accepts anything that converts into [`anyhow::Error`], so both a raw
/// `prompt()` result and a whole prompting flow can go through it. On
/// cancellation a newline is printed so following output starts clean.
pub fn prompt_or_cancel<T, E>(result: Result<T, E>) -> Result<Option<T>>
where
    E: Into<anyhow::Error>,
{
    match result.map_err(Into::into) {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
