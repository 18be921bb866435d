//! The `degrees` program flow.

use std::io::{BufRead, Write};

use degrees_dataset::load_dir;
use degrees_search::policy::SearchPolicy;
use degrees_search::shortest_path_with_policy;
use degrees_search::trace::digest_canonical_bytes;
use tracing::info;

use crate::args::Args;
use crate::error::CliError;
use crate::prompt::resolve_person;
use crate::report::render_path;

/// Load the dataset, resolve both people, search, and print the result.
///
/// # Errors
///
/// Returns [`CliError`] if loading fails, a name cannot be resolved, the
/// trace cannot be written, or I/O on `input`/`out` fails.
pub fn run<I: BufRead, O: Write>(args: &Args, input: &mut I, out: &mut O) -> Result<(), CliError> {
    writeln!(out, "Loading data...")?;
    let dataset = load_dir(&args.directory)?;
    writeln!(out, "Data loaded.")?;

    let source = resolve_person(&dataset, args.source.as_deref(), input, out)?;
    let target = resolve_person(&dataset, args.target.as_deref(), input, out)?;

    let policy = if args.trace.is_some() {
        SearchPolicy::default().with_trace()
    } else {
        SearchPolicy::default()
    };
    let outcome = shortest_path_with_policy(&dataset, &source, &target, &policy)?;

    if let (Some(path), Some(trace)) = (&args.trace, &outcome.trace) {
        let bytes = trace.to_canonical_json_bytes().map_err(|e| CliError::TraceWrite {
            path: path.clone(),
            detail: e.to_string(),
        })?;
        let digest = digest_canonical_bytes(&bytes);
        std::fs::write(path, bytes).map_err(|e| CliError::TraceWrite {
            path: path.clone(),
            detail: e.to_string(),
        })?;
        info!(path = %path.display(), %digest, "search trace written");
    }

    match &outcome.path {
        None => writeln!(out, "Not connected.")?,
        Some(path) => {
            for line in render_path(&dataset, &source, path) {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}
