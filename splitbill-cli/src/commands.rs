use clap::{Parser, Subcommand};

/// One line typed at the shell prompt
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Register a participant
    Add {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        name: Vec<String>,
    },
    /// Remove a participant by id
    #[command(visible_alias = "rm")]
    Remove { id: String },
    /// List participants
    People,
    /// Set the draft title
    Title {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set the draft amount
    Amount {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Set the payer by participant id, `-` for nobody
    Payer {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Toggle the equal split across all participants
    Split,
    /// Set one participant's share of the draft; omit the value to blank it
    Owe {
        id: String,
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Show the draft
    Draft,
    /// Record the draft, or save the transaction being edited
    #[command(visible_alias = "update")]
    Submit,
    /// Load a transaction into the draft for editing
    Edit { id: String },
    /// Leave edit mode and clear the draft
    Cancel,
    /// Delete a transaction
    Delete { id: String },
    /// List transactions
    List,
    /// Show everyone's balance
    Summary,
    /// Suggest transfers that settle every balance
    Settle,
    /// Leave the shell
    #[command(visible_alias = "exit")]
    Quit,
}
