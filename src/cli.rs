use clap::{Parser, ValueEnum};

pub const DEFAULT_MODELS_DIR: &str = "Models";
pub const DEFAULT_NAMESPACE: &str = "mess_management.Models";
pub const DEFAULT_DATA_CONTEXT: &str = "AppDbContext";
pub const DEFAULT_RELATIVE_FOLDER: &str = "Controllers";

#[derive(Parser, Debug)]
#[command(
    name = "scaffold-controllers",
    version,
    about = "Print aspnet-codegenerator controller commands for each model"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, help = "Log debug details to stderr")]
    pub verbose: bool,
    #[arg(
        long,
        default_value = DEFAULT_MODELS_DIR,
        help = "Directory holding the model .cs files"
    )]
    pub models_dir: String,
    #[arg(
        long,
        default_value = DEFAULT_NAMESPACE,
        help = "Namespace prefix for model and data context types"
    )]
    pub namespace: String,
    #[arg(
        long,
        default_value = DEFAULT_DATA_CONTEXT,
        help = "DbContext type; its own .cs file is never scaffolded"
    )]
    pub data_context: String,
    #[arg(
        long,
        default_value = DEFAULT_RELATIVE_FOLDER,
        help = "Folder the generator writes controllers into"
    )]
    pub relative_folder: String,
    #[arg(long, value_enum, default_value_t = ScaffoldStyle::Views)]
    pub style: ScaffoldStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScaffoldStyle {
    /// MVC controllers with views and the default layout.
    Views,
    /// REST controllers without views.
    Api,
}
