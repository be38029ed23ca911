//! Run command implementation.

use super::output::{JsonClick, JsonRunReport, describe_outcome, format_board};
use super::{Click, CliError, OutputFormat};
use solit::{Session, SessionConfig, Slot};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the JSON report cannot be written.
pub(crate) fn execute(
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
    clicks: &[Click],
) -> Result<(), CliError> {
    let config = seed.map_or_else(SessionConfig::default, |seed| SessionConfig { seed });
    let mut session = Session::from_config(&config);

    let outcomes: Vec<_> = clicks
        .iter()
        .map(|click| {
            let slot = click
                .0
                .and_then(|coord| session.board().slot_at(coord.row, coord.col))
                .filter(|slot| slot.state().is_playable())
                .map(Slot::index);
            session.select_or_move(slot)
        })
        .collect();

    match format {
        OutputFormat::Text => {
            if !quiet {
                println!("Seed {}", config.seed);
                for (i, outcome) in outcomes.iter().enumerate() {
                    println!("  {:>3}: {}", i + 1, describe_outcome(outcome));
                }
                println!();
            }
            print!("{}", format_board(&session.snapshot()));
        }
        OutputFormat::Json => {
            let report = JsonRunReport {
                seed: config.seed,
                clicks: outcomes.iter().map(JsonClick::from_outcome).collect(),
                board: session.snapshot(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
