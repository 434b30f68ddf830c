pub use codec::{read, read_str, write, write_string};
pub use edge::{Edge, EdgeId};
pub use error::{CodecError, GraphError, KeyError, RingError};
pub use graph::{Direction, Graph};
pub use key::VertexKey;
pub use pretty::Pretty;
pub use vertex::{Vertex, VertexId};

pub mod arena;
pub mod ring;
mod codec;
mod document;
mod edge;
mod error;
mod graph;
mod key;
mod pretty;
mod vertex;
