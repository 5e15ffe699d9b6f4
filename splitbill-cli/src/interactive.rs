use crate::shell::{Flow, Shell};
use anyhow::Context;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use ledger_service::KeyValueStore;
use std::io::{self, IsTerminal, Write};

const BANNER: &str = "Splitbill: type `help` for commands, `quit` to leave.";

/// Drive the shell from the terminal, or from piped stdin when not attended
///
/// # Errors
///
/// Fails when stdout cannot be written or piped input cannot be read.
pub fn run_interactive<S: KeyValueStore>(shell: &mut Shell<S>) -> anyhow::Result<()> {
    let stdout = io::stdout();

    if !(console::user_attended() && io::stdin().is_terminal()) {
        shell
            .run(io::stdin().lock(), &mut stdout.lock())
            .context("failed to process piped commands")?;
        return Ok(());
    }

    writeln!(stdout.lock(), "{BANNER}")?;
    let theme = ColorfulTheme::default();

    loop {
        let line = match Input::<String>::with_theme(&theme)
            .with_prompt(shell.prompt())
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(error) => {
                // Ctrl-D / Ctrl-C end the session
                tracing::debug!(%error, "prompt closed");
                break;
            }
        };

        if shell.execute(&line, &mut stdout.lock())? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
