use crate::config::Config;
use crate::ui::Screen;
use aboutlib_types::Library;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

pub fn handle(config: &Config, library: Option<String>) -> Result<()> {
    let (name, library) = super::resolve_library(config, library, None)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let presses = run_screen(Arc::from(library), &name, stdin.lock(), stdout.lock())?;

    tracing::info!(library = %name, presses, "screen closed");
    Ok(())
}

/// Drive a [`Screen`] from line-based input until `q`, `quit` or EOF.
///
/// An empty line or `press` activates the button. Returns the number of
/// presses.
pub fn run_screen<R, W>(
    library: Arc<dyn Library>,
    name: &str,
    input: R,
    mut output: W,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut screen = Screen::new(library);
    let mut presses = 0;

    writeln!(output, "aboutlib - {}", name)?;
    writeln!(
        output,
        "[ {} ]  Enter: press, q: quit",
        screen.button().caption()
    )?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" | "press" => {
                if screen.press() {
                    presses += 1;
                    tracing::debug!(presses, "button pressed");
                }
                writeln!(output, "{}", screen.label().text())?;
                writeln!(output)?;
            }
            "q" | "quit" => break,
            other => {
                writeln!(
                    output,
                    "Unknown input '{}'. Press Enter to show the description, q to quit.",
                    other
                )?;
            }
        }
        output.flush()?;
    }

    Ok(presses)
}
