//! Interactive name prompts and disambiguation.

use std::io::{BufRead, Write};

use degrees_dataset::{Dataset, NameResolution, PersonId};
use tracing::debug;

use crate::error::CliError;

/// Print `label`, then read one line with surrounding whitespace removed.
///
/// End of input reads as an empty line.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing the prompt or reading fails.
pub fn prompt_line<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    label: &str,
) -> Result<String, CliError> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Turn a name (given, or prompted for with `Name: `) into one person id.
///
/// Ambiguous names list every candidate and ask for an id.
///
/// # Errors
///
/// Returns [`CliError::PersonNotFound`] if the name is unknown or the chosen
/// id was not among the candidates, and [`CliError::Io`] on I/O failure.
pub fn resolve_person<I: BufRead, O: Write>(
    dataset: &Dataset,
    name: Option<&str>,
    input: &mut I,
    out: &mut O,
) -> Result<PersonId, CliError> {
    let name = match name {
        Some(n) => n.to_string(),
        None => prompt_line(input, out, "Name: ")?,
    };

    let resolution = dataset.resolve_name(&name);
    let chosen = match &resolution {
        NameResolution::NotFound => None,
        NameResolution::Unique(id) => Some(id.clone()),
        NameResolution::Ambiguous(candidates) => {
            writeln!(out, "Which '{name}'?")?;
            for c in candidates {
                let birth = c.birth.map(|b| b.to_string()).unwrap_or_default();
                writeln!(out, "ID: {}, Name: {}, Birth: {birth}", c.id, c.name)?;
            }
            let answer = prompt_line(input, out, "Intended Person ID: ")?;
            resolution.choose(&answer)
        }
    };

    let id = chosen.ok_or(CliError::PersonNotFound { name: name.clone() })?;
    debug!(%name, %id, "resolved person");
    Ok(id)
}
