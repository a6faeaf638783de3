//! Error type for graph construction and search.

use std::fmt;

/// Errors that can occur when building or searching a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge referenced an arrow name that is not in the vocabulary.
    UnknownArrow(String),
    /// A solver endpoint name does not resolve to a node.
    EndpointNotFound(String),
    /// An arrow registration reused a long or short name already in the vocabulary.
    DuplicateArrow(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownArrow(name) => write!(f, "unknown arrow '{name}'"),
            GraphError::EndpointNotFound(name) => {
                write!(f, "no node named '{name}' to search from")
            }
            GraphError::DuplicateArrow(name) => {
                write!(f, "arrow '{name}' is already registered")
            }
        }
    }
}

impl std::error::Error for GraphError {}
