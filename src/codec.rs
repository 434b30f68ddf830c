//! Line-oriented text format for graphs.
//!
//! Each line holds either one key, declaring a vertex, or two keys, declaring
//! an edge between them. Blank lines are ignored. Writing produces the same
//! format, so the output of [`write`] can be fed back to [`read`].

use std::{
    collections::HashSet,
    io::{BufRead, Write},
};

use tracing::debug;

use crate::{
    document::Spanned,
    error::CodecError,
    graph::{Direction, Graph},
    key::VertexKey,
    vertex::VertexId,
};

use self::{lexer::Token, parser::Line};

mod lexer;
mod parser;

/// Builds a graph named `name` from `input`.
///
/// Repeated vertices and repeated edges are skipped. Undirected graphs get
/// both arcs of every edge. The first malformed line aborts the read.
pub fn read<K: VertexKey>(
    name: &str,
    input: impl BufRead,
    direction: Direction,
) -> Result<Graph<K>, CodecError> {
    let mut graph = Graph::new(name);

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        match parse_line(&line, number)? {
            Line::Blank => {}

            Line::Vertex(key) => {
                let key = parse_key(key, number)?;
                vertex_for(&mut graph, key)?;
            }

            Line::Edge(source, target) => {
                let source = parse_key(source, number)?;
                let target = parse_key(target, number)?;
                let source = vertex_for(&mut graph, source)?;
                let target = vertex_for(&mut graph, target)?;

                if !graph.has_arc(source, target) {
                    graph.add_edge(source, target)?;
                }
                if !direction.is_directed() && !graph.has_arc(target, source) {
                    graph.add_edge(target, source)?;
                }
            }
        }
    }

    debug!(
        graph = name,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(direction),
        "read graph"
    );
    Ok(graph)
}

pub fn read_str<K: VertexKey>(
    name: &str,
    text: &str,
    direction: Direction,
) -> Result<Graph<K>, CodecError> {
    read(name, text.as_bytes(), direction)
}

/// Writes `graph` in the format accepted by [`read`].
///
/// Vertices are visited in ring order. In an undirected graph an arc is
/// skipped when its target was visited earlier, since the mirrored arc has
/// already been written. A vertex without outgoing arcs gets a line of its own.
pub fn write<K: VertexKey>(
    graph: &Graph<K>,
    mut output: impl Write,
    direction: Direction,
) -> Result<(), CodecError> {
    let mut visited: HashSet<VertexId> = HashSet::new();

    for (id, vertex) in graph.vertices() {
        if vertex.degree() == 0 {
            writeln!(output, "{}", vertex.key())?;
        }

        for neighbor in graph.neighbors(id) {
            if !direction.is_directed() && visited.contains(&neighbor) {
                continue;
            }
            if let Some(target) = graph.key(neighbor) {
                writeln!(output, "{} {}", vertex.key(), target)?;
            }
        }

        visited.insert(id);
    }

    output.flush()?;
    Ok(())
}

pub fn write_string<K: VertexKey>(
    graph: &Graph<K>,
    direction: Direction,
) -> Result<String, CodecError> {
    let mut buffer = vec![];
    write(graph, &mut buffer, direction)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn parse_line(line: &str, number: usize) -> Result<Line<'_>, CodecError> {
    let tokens = lexer::tokenize(line);
    parser::parse(tokens, line.len()).map_err(|errors| {
        let (column, found) = match errors.first() {
            Some(error) => (
                error.span().start.column(),
                error
                    .found()
                    .map(Token::to_string)
                    .unwrap_or_else(|| "end of line".to_string()),
            ),
            None => (1, line.to_string()),
        };

        CodecError::Syntax {
            line: number,
            column,
            found,
        }
    })
}

fn parse_key<K: VertexKey>(token: Spanned<&str>, number: usize) -> Result<K, CodecError> {
    K::parse_key(token.value).map_err(|source| CodecError::Key {
        line: number,
        column: token.span.start.column(),
        source,
    })
}

/// Finds the vertex with `key`, adding it first if the graph lacks one.
fn vertex_for<K: VertexKey>(graph: &mut Graph<K>, key: K) -> Result<VertexId, CodecError> {
    match graph.lookup(&key) {
        Some(vertex) => Ok(vertex),
        None => Ok(graph.add_vertex(key)?),
    }
}
