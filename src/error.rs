use std::num::ParseIntError;

use thiserror::Error;

use crate::{arena::Index, vertex::VertexId};

/// Refused ring operations. None of them mutate the ring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RingError {
    #[error("Node {node} is still linked into a ring")]
    AlreadyLinked { node: Index },

    #[error("Attempted to remove node {node} from an empty ring")]
    Empty { node: Index },

    #[error("Node {node} is not a member of this ring")]
    NotMember { node: Index },

    #[error("Node {node} does not exist in the arena")]
    Stale { node: Index },

    #[error("Node {node} has a missing link")]
    Broken { node: Index },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Unknown vertex {0}")]
    UnknownVertex(VertexId),

    #[error(transparent)]
    Ring(#[from] RingError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeyError {
    #[error("`{token}` is not an integer vertex id")]
    NotAnInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Line {line}, column {column}: unexpected `{found}`, a line holds at most two vertex keys")]
    Syntax {
        line: usize,
        column: usize,
        found: String,
    },

    #[error("Line {line}, column {column}: {source}")]
    Key {
        line: usize,
        column: usize,
        #[source]
        source: KeyError,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
