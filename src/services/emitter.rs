use crate::domain::models::{ControllerCommand, ScaffoldOptions};
use crate::services::output::print_out;
use crate::services::{scan, template};
use std::io::Write;
use std::path::Path;

pub fn collect_controller_commands(
    dir: &Path,
    options: &ScaffoldOptions,
) -> anyhow::Result<Vec<ControllerCommand>> {
    tracing::debug!(dir = %dir.display(), "scanning models directory");
    let entries = scan::list_entries(dir)?;
    let commands: Vec<_> = scan::model_names(&entries, &options.data_context)
        .iter()
        .map(|model| template::render(model, options))
        .collect();
    tracing::debug!(count = commands.len(), "rendered controller commands");
    Ok(commands)
}

/// Writes one command line per model in `dir` and returns how many were
/// written. Nothing is written when the directory cannot be listed.
pub fn emit_controller_commands(
    dir: &Path,
    options: &ScaffoldOptions,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let commands = collect_controller_commands(dir, options)?;
    print_out(out, json, &commands, |c| c.command.clone())?;
    Ok(commands.len())
}
