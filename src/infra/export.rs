use std::{
    fmt::{Debug, Display},
    io::{self, Cursor, Write},
};

use crate::{core::KeyType, graph::Graph};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Graphviz representation of a graph. Vertices are named by their position
/// in the insertion order, labels are produced by the given closures.
pub struct Dot<K, V, E> {
    name: String,
    get_vertex_label: Box<dyn Fn(&K, &V) -> String>,
    get_edge_label: Box<dyn Fn(&E) -> String>,
}

impl<K, V, E> Dot<K, V, E> {
    pub fn new<FV, FE>(name: Option<String>, get_vertex_label: FV, get_edge_label: FE) -> Self
    where
        FV: Fn(&K, &V) -> String + 'static,
        FE: Fn(&E) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
            get_edge_label: Box::new(get_edge_label),
        }
    }

    pub fn to_string(&self, graph: &Graph<K, V, E>) -> String
    where
        K: KeyType,
    {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl<K: Debug, V: Display, E: Display> Dot<K, V, E> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |k, v| format!("{k:?}: {v}"), |e| format!("{e}"))
    }
}

impl<K, V, E> Export<Graph<K, V, E>> for Dot<K, V, E>
where
    K: KeyType,
{
    fn export<W: Write>(&self, graph: &Graph<K, V, E>, out: &mut W) -> io::Result<()> {
        out.write_all(b"digraph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for (i, vertex) in graph.vertices().enumerate() {
            out.write_all(
                format!(
                    "    v{} [label={:?}];\n",
                    i,
                    (self.get_vertex_label)(vertex.key(), vertex.data())
                )
                .as_bytes(),
            )?;
        }

        for (start, end, data) in graph.edges() {
            let (Some(u), Some(v)) = (graph.position(start), graph.position(end)) else {
                continue;
            };

            out.write_all(
                format!(
                    "    v{} -> v{} [label={:?}];\n",
                    u,
                    v,
                    (self.get_edge_label)(data)
                )
                .as_bytes(),
            )?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_with_display() {
        let mut graph = Graph::new();
        graph
            .extend_with_vertices([("a", 1), ("b", 2), ("c", 3)])
            .unwrap();
        graph
            .extend_with_edges([("a", "b", 'x'), ("c", "a", 'y')])
            .unwrap();

        let dot = Dot::with_display(Some(String::from("Routes"))).to_string(&graph);

        assert_eq!(
            dot,
            "digraph Routes {\n    v0 [label=\"\\\"a\\\": 1\"];\n    v1 [label=\"\\\"b\\\": 2\"];\n    v2 [label=\"\\\"c\\\": 3\"];\n    v0 -> v1 [label=\"x\"];\n    v2 -> v0 [label=\"y\"];\n}\n"
        );
    }

    #[test]
    fn dot_custom_labels_after_removal() {
        let mut graph = Graph::new();
        graph
            .extend_with_vertices([(10, ()), (20, ()), (30, ())])
            .unwrap();
        graph.extend_with_edges([(10, 30, 5), (30, 20, 7)]).unwrap();
        graph.remove_vertex(&20).unwrap();

        let dot = Dot::new(None, |k: &i32, _: &()| k.to_string(), |e: &i32| e.to_string())
            .to_string(&graph);

        assert_eq!(
            dot,
            "digraph G {\n    v0 [label=\"10\"];\n    v1 [label=\"30\"];\n    v0 -> v1 [label=\"5\"];\n}\n"
        );
    }
}
