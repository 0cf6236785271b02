use crate::cli::{
    Cli, ScaffoldStyle, DEFAULT_DATA_CONTEXT, DEFAULT_NAMESPACE, DEFAULT_RELATIVE_FOLDER,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub namespace: String,
    pub data_context: String,
    pub relative_folder: String,
    pub style: ScaffoldStyle,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            data_context: DEFAULT_DATA_CONTEXT.to_string(),
            relative_folder: DEFAULT_RELATIVE_FOLDER.to_string(),
            style: ScaffoldStyle::Views,
        }
    }
}

impl From<&Cli> for ScaffoldOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            namespace: cli.namespace.clone(),
            data_context: cli.data_context.clone(),
            relative_folder: cli.relative_folder.clone(),
            style: cli.style,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ControllerCommand {
    pub model: String,
    pub controller: String,
    pub command: String,
}
