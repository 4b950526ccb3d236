//! CLI command handlers.

mod input;
mod inspect;
mod normalize;

pub use input::read_inputs;
pub use inspect::run_inspect;
pub use normalize::run_normalize;

use anyhow::{bail, Result};
use urinorm_core::{normalize_with_tier, Normalized};

/// Normalizes each input and hands successes to `emit`.
///
/// Failures are logged and reported on stderr; with `fail_fast` the first one
/// aborts the run, otherwise the run fails at the end if any input failed.
fn for_each_normalized<F>(inputs: &[String], fail_fast: bool, mut emit: F) -> Result<()>
where
    F: FnMut(&str, &Normalized) -> Result<()>,
{
    let mut failed = 0usize;
    for input in inputs {
        match normalize_with_tier(input) {
            Ok(normalized) => emit(input, &normalized)?,
            Err(err) if fail_fast => return Err(err.into()),
            Err(err) => {
                tracing::warn!("{}", err);
                eprintln!("urinorm: {}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} inputs could not be normalized", failed, inputs.len());
    }
    Ok(())
}
