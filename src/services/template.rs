use crate::cli::ScaffoldStyle;
use crate::domain::models::{ControllerCommand, ScaffoldOptions};

pub fn controller_name(model: &str) -> String {
    format!("{}Controller", model)
}

fn style_flags(style: ScaffoldStyle) -> &'static str {
    match style {
        ScaffoldStyle::Views => "--useAsyncActions --useDefaultLayout",
        ScaffoldStyle::Api => "--restWithNoViews",
    }
}

pub fn render(model: &str, options: &ScaffoldOptions) -> ControllerCommand {
    let controller = controller_name(model);
    let command = format!(
        "dotnet aspnet-codegenerator controller --controllerName {controller} --model {ns}.{model} --dataContext {ns}.{ctx} {flags} --force --relativeFolderPath {folder}",
        ns = options.namespace,
        ctx = options.data_context,
        flags = style_flags(options.style),
        folder = options.relative_folder,
    );
    ControllerCommand {
        model: model.to_string(),
        controller,
        command,
    }
}
