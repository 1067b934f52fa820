use thiserror::Error;

/// Error type for tracegraph operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate node: {0}")]
    DuplicateNode(String),
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("duplicate edge: {0}")]
    DuplicateEdge(String),
    #[error("no path found: {0}")]
    NoPathFound(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("cache unavailable: {0}")]
    CacheUnavailable(String),
}

impl GraphError {
    pub fn duplicate_node<T: Into<String>>(msg: T) -> Self {
        GraphError::DuplicateNode(msg.into())
    }

    pub fn unknown_node<T: Into<String>>(msg: T) -> Self {
        GraphError::UnknownNode(msg.into())
    }

    pub fn duplicate_edge<T: Into<String>>(msg: T) -> Self {
        GraphError::DuplicateEdge(msg.into())
    }

    pub fn no_path_found<T: Into<String>>(msg: T) -> Self {
        GraphError::NoPathFound(msg.into())
    }

    pub fn invalid_path<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidPath(msg.into())
    }

    pub fn cache_unavailable<T: Into<String>>(msg: T) -> Self {
        GraphError::CacheUnavailable(msg.into())
    }
}
