/// Token that marks a model source file and is stripped to get the model name.
pub const MODEL_SUFFIX: &str = ".cs";

/// Files in the models directory that are not scaffoldable entities.
/// Matched against the filename as it appears on disk.
pub const EXCLUDED_FILES: [&str; 2] = ["AppDbContext.cs", "ErrorViewModel.cs"];
