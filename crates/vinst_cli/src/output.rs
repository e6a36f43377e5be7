//! Console and clipboard sinks for generated text.

use std::error::Error;
use std::io::{self, Write};

/// Printed after the generated text.
pub const SEPARATOR: &str = "------------------------------------------------";

/// Printed once the text has been placed on the clipboard.
pub const CLIPBOARD_NOTICE: &str = " * Contents also Copy to system clipboard *";

/// Prints `text` to stdout and, if `clipboard` is set, copies it to the
/// system clipboard.
pub fn deliver(text: &str, clipboard: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let copy = clipboard.then_some(copy_to_clipboard);
    write_output(&mut out, text, copy)?;
    Ok(())
}

/// Writes `text` and the separator, then runs `copy` if given.
///
/// The notice line is written only when the copy succeeds; a failure is
/// logged as a warning. Returns whether the text reached the clipboard.
pub fn write_output<W, F>(out: &mut W, text: &str, copy: Option<F>) -> io::Result<bool>
where
    W: Write,
    F: FnOnce(&str) -> Result<(), Box<dyn Error>>,
{
    writeln!(out, "{text}")?;
    writeln!(out, "{SEPARATOR}")?;
    out.flush()?;

    let Some(copy) = copy else {
        log::debug!("clipboard disabled");
        return Ok(false);
    };
    match copy(text) {
        Ok(()) => {
            writeln!(out, "{CLIPBOARD_NOTICE}")?;
            Ok(true)
        }
        Err(e) => {
            log::warn!("could not copy to the system clipboard: {e}");
            Ok(false)
        }
    }
}

/// Places `text` on the system clipboard.
///
/// On X11 and Wayland the selection is owned by this process and is served
/// only while it runs. Once `vinst` exits the text survives only if a
/// clipboard manager has already taken a copy.
fn copy_to_clipboard(text: &str) -> Result<(), Box<dyn Error>> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
