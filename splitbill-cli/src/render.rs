//! Text views over the ledger state.

use colored::Colorize;
use ledger_service::{
    parse_amount, CurrencyFormat, LedgerState, ParticipantId, Transaction, Transfer,
};
use rust_decimal::Decimal;
use std::fmt::Write as _;

fn payer_label(state: &LedgerState, payer: Option<&ParticipantId>) -> String {
    match payer {
        Some(id) => state
            .participant(id)
            .map_or_else(|| format!("unknown ({id})"), |p| p.name.clone()),
        None => "nobody".to_string(),
    }
}

fn name_of(state: &LedgerState, id: &ParticipantId) -> String {
    state
        .participant(id)
        .map_or_else(|| id.to_string(), |p| p.name.clone())
}

fn name_width(state: &LedgerState) -> usize {
    state
        .participants()
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
}

pub fn participants(state: &LedgerState) -> String {
    if state.participants().is_empty() {
        return "No participants yet. Add one with `add <name>`.\n".to_string();
    }

    let mut out = String::new();
    for p in state.participants() {
        let _ = writeln!(out, "  {}  {}", p.id.as_str().dimmed(), p.name);
    }
    out
}

pub fn draft(state: &LedgerState, currency: &CurrencyFormat) -> String {
    let draft = state.draft();
    let mut out = String::new();

    let heading = match state.editing_id() {
        Some(id) => format!("Editing transaction {id}"),
        None => "New transaction".to_string(),
    };
    let _ = writeln!(out, "{} [{}]", heading.bold(), state.submit_label());
    let _ = writeln!(out, "  Title:  {}", draft.title);
    let _ = writeln!(
        out,
        "  Amount: {} ({})",
        currency.format_text(&draft.amount),
        if draft.amount.is_empty() { "blank" } else { draft.amount.as_str() }
    );
    let _ = writeln!(out, "  Payer:  {}", payer_label(state, draft.payer.as_ref()));
    let _ = writeln!(
        out,
        "  Split:  {}",
        if draft.is_split_bill { "equal" } else { "manual" }
    );

    let mut rows: Vec<(String, &str)> = state
        .participants()
        .iter()
        .map(|p| {
            let value = draft.contributions.get(&p.id).map_or("", String::as_str);
            (p.name.clone(), value)
        })
        .collect();
    // Shares of people removed since the transaction was recorded still count
    let mut dangling: Vec<(String, &str)> = draft
        .contributions
        .iter()
        .filter(|(id, _)| state.participant(id).is_none())
        .map(|(id, value)| (format!("removed ({id})"), value.as_str()))
        .collect();
    dangling.sort_unstable();
    rows.extend(dangling);

    if !rows.is_empty() {
        let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
        let _ = writeln!(out, "  Shares:");
        for (label, value) in rows {
            let shown = if value.is_empty() {
                "(blank)".to_string()
            } else {
                format!("{value}  {}", currency.format_text(value))
            };
            let _ = writeln!(out, "    {label:<width$}  {shown}");
        }
    }

    let check = state.draft_check();
    if !check.is_balanced() {
        let _ = writeln!(out, "  {}", format!("! {}", check.message()).yellow());
    }
    out
}

fn transaction_line(state: &LedgerState, tx: &Transaction, currency: &CurrencyFormat) -> String {
    let mut line = format!(
        "  {}  {}  {}  paid by {}",
        tx.id.as_str().dimmed(),
        if tx.title.is_empty() { "(untitled)" } else { tx.title.as_str() },
        currency.format_text(&tx.amount),
        payer_label(state, tx.payer.as_ref()),
    );
    if tx.is_split_bill {
        line.push_str("  [equal split]");
    }
    if !tx.check_contributions().is_balanced() {
        let _ = write!(line, "  {}", "[unbalanced]".yellow());
    }
    if state.editing_id() == Some(&tx.id) {
        line.push_str("  [editing]");
    }
    line
}

pub fn transactions(state: &LedgerState, currency: &CurrencyFormat) -> String {
    if state.transactions().is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut out = String::new();
    for tx in state.transactions() {
        let _ = writeln!(out, "{}", transaction_line(state, tx, currency));
        let mut shares: Vec<(String, &String)> = tx
            .contributions
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(id, value)| (name_of(state, id), value))
            .collect();
        shares.sort();
        for (name, value) in shares {
            let _ = writeln!(out, "      {name} owes {}", currency.format(parse_amount(value)));
        }
    }
    out
}

pub fn summary(state: &LedgerState, currency: &CurrencyFormat) -> String {
    if state.participants().is_empty() {
        return "No participants yet.\n".to_string();
    }

    let width = name_width(state);
    let balances = state.summary();
    let mut out = String::new();
    for (p, balance) in balances.rows(state.participants()) {
        let amount = currency.format(balance);
        let amount = if balance > Decimal::ZERO {
            amount.green()
        } else if balance < Decimal::ZERO {
            amount.red()
        } else {
            amount.normal()
        };
        let _ = writeln!(out, "  {:<width$}  {amount}", p.name);
    }
    out
}

pub fn settlement(state: &LedgerState, transfers: &[Transfer], currency: &CurrencyFormat) -> String {
    if transfers.is_empty() {
        return "Everyone is settled up.\n".to_string();
    }

    let mut out = String::new();
    for t in transfers {
        let _ = writeln!(
            out,
            "  {} pays {} {}",
            name_of(state, &t.from),
            name_of(state, &t.to),
            currency.format(t.amount)
        );
    }
    out
}
