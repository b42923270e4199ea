//! Replay command
//!
//! Maps a recorded sample file into logical coordinates and writes the result.

use crate::config::MapperConfig;
use crate::error::MapperResult;
use crate::input::diagnostics::DiagnosticSink;
use crate::processing::replay::{load_samples, replay, write_output, ReplayOutput};
use std::path::Path;

/// Replay `input_file` and write mapped samples to `output_file`
pub fn process_pointer_replay<S: DiagnosticSink>(
    input_file: &Path,
    output_file: &Path,
    config: &MapperConfig,
    sink: S,
) -> MapperResult<ReplayOutput> {
    let samples = load_samples(input_file)?;

    tracing::info!(
        "Replaying {} pointer samples from {} onto {} logical screen",
        samples.len(),
        input_file.display(),
        config.logical_screen
    );

    let output = replay(&samples, config, sink);
    write_output(output_file, &output)?;

    tracing::info!(
        "Wrote {} mapped samples ({} button events) to {}",
        output.samples.len(),
        output.button_events.len(),
        output_file.display()
    );

    Ok(output)
}
