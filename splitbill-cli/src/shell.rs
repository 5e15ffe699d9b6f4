use crate::commands::{ShellCommand, ShellLine};
use crate::render;
use clap::Parser;
use colored::Colorize;
use ledger_service::{
    CurrencyFormat, DraftField, KeyValueStore, LedgerService, ParticipantId, TransactionId,
};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end over a [`LedgerService`].
///
/// The core operations stay permissive; user-facing checks such as "payer
/// must be a participant" and "no manual shares during an equal split" live
/// here. `owe` also takes the id of a removed participant whose share is
/// still on the draft, so it can be blanked.
pub struct Shell<S> {
    ledger: LedgerService<S>,
    currency: CurrencyFormat,
}

impl<S: KeyValueStore> Shell<S> {
    pub fn new(ledger: LedgerService<S>, currency: CurrencyFormat) -> Self {
        Self { ledger, currency }
    }

    pub fn ledger(&self) -> &LedgerService<S> {
        &self.ledger
    }

    pub fn prompt(&self) -> String {
        match self.ledger.state().editing_id() {
            Some(id) => format!("splitbill (editing {id})"),
            None => "splitbill".to_string(),
        }
    }

    /// Feed every line of `input` through [`Shell::execute`] until `quit` or EOF
    ///
    /// # Errors
    ///
    /// Propagates read and write failures.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            if self.execute(&line?, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Parse and apply one command line
    ///
    /// # Errors
    ///
    /// Only write failures on `out`; bad input is reported as text.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        match ShellLine::try_parse_from(words) {
            Ok(parsed) => self.dispatch(parsed.command, out),
            Err(err) => {
                write!(out, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> io::Result<Flow> {
        let state = self.ledger.state();

        match command {
            ShellCommand::Add { name } => match self.ledger.add_participant(&name.join(" ")) {
                Some(p) => writeln!(out, "Added {} ({}).", p.name, p.id)?,
                None => writeln!(out, "Nothing added: the name is blank.")?,
            },
            ShellCommand::Remove { id } => {
                match self.ledger.remove_participant(&ParticipantId::new(id.as_str())) {
                    Some(p) => writeln!(out, "Removed {}.", p.name)?,
                    None => writeln!(out, "No participant with id {id}.")?,
                }
            }
            ShellCommand::People => write!(out, "{}", render::participants(state))?,
            ShellCommand::Title { text } => {
                self.ledger.update_field(DraftField::Title, text.join(" "));
                writeln!(out, "Title set.")?;
            }
            ShellCommand::Amount { value } => {
                self.ledger.update_field(DraftField::Amount, value);
                write!(out, "{}", render::draft(self.ledger.state(), &self.currency))?;
            }
            ShellCommand::Payer { id } => {
                if id == "-" {
                    self.ledger.update_field(DraftField::Payer, "");
                    writeln!(out, "Payer cleared.")?;
                } else {
                    let id = ParticipantId::new(id);
                    match state.participant(&id).map(|p| p.name.clone()) {
                        Some(name) => {
                            self.ledger.update_field(DraftField::Payer, id.as_str());
                            writeln!(out, "{name} pays.")?;
                        }
                        None => writeln!(out, "No participant with id {id}.")?,
                    }
                }
            }
            ShellCommand::Split => {
                let on = self.ledger.toggle_split_bill();
                writeln!(out, "Equal split {}.", if on { "on" } else { "off" })?;
                write!(out, "{}", render::draft(self.ledger.state(), &self.currency))?;
            }
            ShellCommand::Owe { id, value } => {
                let id = ParticipantId::new(id);
                if state.draft().is_split_bill {
                    writeln!(
                        out,
                        "Equal split is on; run `split` to enter shares by hand."
                    )?;
                } else if state.participant(&id).is_none()
                    && !state.draft().contributions.contains_key(&id)
                {
                    writeln!(out, "No participant with id {id}.")?;
                } else {
                    self.ledger
                        .update_contribution(&id, value.unwrap_or_default());
                    write!(out, "{}", render::draft(self.ledger.state(), &self.currency))?;
                }
            }
            ShellCommand::Draft => write!(out, "{}", render::draft(state, &self.currency))?,
            ShellCommand::Submit => {
                let check = state.draft_check();
                let updating = state.is_editing();
                if !check.is_balanced() {
                    writeln!(out, "{}", format!("Warning: {}", check.message()).yellow())?;
                }
                let id = self.ledger.submit();
                let verb = if updating { "Updated" } else { "Recorded" };
                writeln!(out, "{verb} transaction {id}.")?;
            }
            ShellCommand::Edit { id } => {
                let id = TransactionId::new(id);
                match self.ledger.edit(&id) {
                    Ok(()) => {
                        writeln!(out, "Editing transaction {id}; `update` saves, `cancel` discards.")?;
                        write!(out, "{}", render::draft(self.ledger.state(), &self.currency))?;
                    }
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            ShellCommand::Cancel => {
                self.ledger.cancel_edit();
                writeln!(out, "Draft cleared.")?;
            }
            ShellCommand::Delete { id } => {
                let id = TransactionId::new(id);
                if self.ledger.delete(&id) {
                    writeln!(out, "Deleted transaction {id}.")?;
                } else {
                    writeln!(out, "No transaction with id {id}.")?;
                }
            }
            ShellCommand::List => write!(out, "{}", render::transactions(state, &self.currency))?,
            ShellCommand::Summary => write!(out, "{}", render::summary(state, &self.currency))?,
            ShellCommand::Settle => {
                let transfers = state.settlement();
                write!(out, "{}", render::settlement(state, &transfers, &self.currency))?;
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}
