use crate::domain::constants::{EXCLUDED_FILES, MODEL_SUFFIX};
use anyhow::Context;
use std::path::Path;

/// Lists file names in `dir` in the order the filesystem returns them.
/// Names that are not valid UTF-8 are converted lossily.
pub fn list_entries(dir: &Path) -> anyhow::Result<Vec<String>> {
    let read = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read models directory {}", dir.display()))?;
    let mut names = Vec::new();
    for entry in read {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let raw = entry.file_name();
        let name = raw.to_string_lossy().into_owned();
        if raw.to_str().is_none() {
            tracing::warn!(file = %name, "file name is not valid UTF-8");
        }
        names.push(name);
    }
    Ok(names)
}

/// True for the fixed exclusion set and for the configured DbContext's own
/// source file.
pub fn is_excluded(file_name: &str, data_context: &str) -> bool {
    EXCLUDED_FILES.contains(&file_name)
        || file_name
            .strip_suffix(MODEL_SUFFIX)
            .is_some_and(|stem| stem == data_context)
}

/// Removes the first `.cs` wherever it occurs, so `Product.csv.cs` becomes
/// `Productv.cs`.
pub fn derive_model_name(file_name: &str) -> String {
    file_name.replacen(MODEL_SUFFIX, "", 1)
}

/// Keeps `.cs` entries that are not excluded and maps them to model names,
/// preserving input order.
pub fn model_names<S: AsRef<str>>(entries: &[S], data_context: &str) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.as_ref())
        .filter(|name| name.ends_with(MODEL_SUFFIX))
        .filter(|name| {
            let excluded = is_excluded(name, data_context);
            if excluded {
                tracing::debug!(file = *name, "skipping excluded file");
            }
            !excluded
        })
        .map(derive_model_name)
        .collect()
}
