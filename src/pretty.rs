use std::fmt;

use crate::{
    graph::{Direction, Graph},
    key::VertexKey,
};

/// Formatted dump of a graph: a summary header, then one line per vertex
/// listing its outgoing arcs.
pub struct Pretty<'a, K: VertexKey> {
    graph: &'a Graph<K>,
    direction: Direction,
}

impl<K: VertexKey> Graph<K> {
    pub fn display(&self, direction: Direction) -> Pretty<'_, K> {
        Pretty {
            graph: self,
            direction,
        }
    }
}

impl<K: VertexKey> fmt::Display for Pretty<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph;
        writeln!(
            f,
            "graph: {} | nodes: {} | edges: {}",
            graph.name(),
            graph.vertex_count(),
            graph.edge_count(self.direction)
        )?;

        for (id, vertex) in graph.vertices() {
            write!(f, "|{}|", vertex.key().render(vertex.value()))?;
            for neighbor in graph.neighbors(id).filter_map(|neighbor| graph.vertex(neighbor)) {
                write!(f, "-> {}", neighbor.key().render(neighbor.value()))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{read_str, Direction};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn integer_graph() {
        let graph = read_str::<i64>("und_graph", "1 2\n2 13\n", Direction::Undirected).unwrap();
        let expected = indoc! {"
            graph: und_graph | nodes: 3 | edges: 2
            |(1)[ 1]|-> (2)[ 2]
            |(2)[ 2]|-> (1)[ 1]-> (13)[13]
            |(13)[13]|-> (2)[ 2]
        "};
        assert_eq!(graph.display(Direction::Undirected).to_string(), expected);
    }

    #[test]
    fn named_directed_graph() {
        let graph = read_str::<String>("d_graph", "a b\nc\n", Direction::Directed).unwrap();
        let expected = indoc! {"
            graph: d_graph | nodes: 3 | edges: 1
            |[a]|-> [b]
            |[b]|
            |[c]|
        "};
        assert_eq!(graph.display(Direction::Directed).to_string(), expected);
    }
}
