use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("hierarchy request: {0}")]
    HierarchyRequest(String),

    #[error("node is not a child of the given parent")]
    NotFound,

    #[error("offset {offset} exceeds node length {length}")]
    IndexSize { offset: usize, length: usize },

    #[error("node has no parent")]
    Detached,

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Arena(#[from] indextree::NodeError),
}

pub type DomResult<T> = Result<T, DomError>;
