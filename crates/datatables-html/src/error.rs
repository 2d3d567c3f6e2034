use datatables_params::ParamsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HtmlError {
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("template argument {0} is missing")]
    MissingTemplateArgument(usize),
    #[error("template {name} failed to render: {message}")]
    Template { name: String, message: String },
}
