//! Parsing helpers for numbers, entry ids, and output format.

use stock_core::validation::parse_number;
use stock_core::LedgerRecord;
use uuid::Uuid;

use crate::errors::CliError;

/// Display format requested with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Parse a quantity typed on the command line.
pub fn parse_quantity(raw: &str) -> anyhow::Result<f64> {
    Ok(parse_number("quantity", raw)?)
}

/// Parse a unit price typed on the command line.
pub fn parse_price(raw: &str) -> anyhow::Result<f64> {
    Ok(parse_number("price", raw)?)
}

/// Resolve a full id or a unique id prefix to the id of an entry in `entries`.
///
/// Prefixes are matched case-insensitively against the hyphenated id; an
/// empty or ambiguous prefix is rejected.
pub fn resolve_entry_id<E: LedgerRecord>(
    entries: &[E],
    raw: &str,
    list_command: &str,
) -> anyhow::Result<Uuid> {
    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        return Err(CliError::invalid_input("Entry ID must not be empty").into());
    }

    if let Ok(id) = Uuid::parse_str(&needle) {
        if entries.iter().any(|entry| entry.id() == id) {
            return Ok(id);
        }
        return Err(not_found(raw, list_command).into());
    }

    let matches: Vec<Uuid> = entries
        .iter()
        .map(|entry| entry.id())
        .filter(|id| id.hyphenated().to_string().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [] => Err(not_found(raw, list_command).into()),
        [id] => Ok(*id),
        _ => Err(CliError::invalid_input(format!(
            "Entry ID prefix \"{}\" matches {} entries; use more characters",
            raw,
            matches.len()
        ))
        .into()),
    }
}

fn not_found(raw: &str, list_command: &str) -> CliError {
    CliError::not_found(
        format!("Entry {} not found", raw),
        format!("Hint: Run `stock {}` to find entry IDs.", list_command),
    )
}
