use plate_dom::DomError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no selection range is available")]
    NoSelection,

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;
