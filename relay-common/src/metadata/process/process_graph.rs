use super::{Edge, EdgeDirection, Node};
use crate::prelude::*;

/// Immutable view of a process definition's `structure`: its nodes and the edges between them,
/// both kept in definition order.
#[derive(Clone, Debug)]
pub struct ProcessGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<InlineStr, usize>,
}

impl ProcessGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> RelayResult<Self> {
        let mut node_index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if node_index.insert(node.id.clone(), i).is_some() {
                return fmt_err!(Deserialization, "duplicate node id: {}", node.id);
            }
        }

        for edge in &edges {
            for endpoint in [&edge.source, &edge.target] {
                if !node_index.contains_key(endpoint) {
                    return fmt_err!(
                        NotFound,
                        "edge {} refers to missing node {}",
                        edge.id,
                        endpoint
                    );
                }
            }
        }

        Ok(Self {
            nodes,
            edges,
            node_index,
        })
    }

    pub fn get_node(&self, node_id: &str) -> RelayResult<&Node> {
        self.node_index
            .get(node_id)
            .map(|i| &self.nodes[*i])
            .ok_or_else(|| ErrorCode::NotFound(format!("node not found in process: {}", node_id)))
    }
    /// Edges touching `node_id` from the given side. A node without such edge is a malformed
    /// definition, not an empty answer.
    pub fn get_edges(&self, node_id: &str, direction: EdgeDirection) -> RelayResult<Vec<&Edge>> {
        let edges = self
            .edges
            .iter()
            .filter(|edge| match direction {
                EdgeDirection::AsSource => edge.source.eq(node_id),
                EdgeDirection::AsTarget => edge.target.eq(node_id),
            })
            .collect::<Vec<_>>();

        if edges.is_empty() {
            fmt_err!(
                NotFound,
                "no edge with {} as {}",
                node_id,
                match direction {
                    EdgeDirection::AsSource => "source",
                    EdgeDirection::AsTarget => "target",
                }
            )
        } else {
            Ok(edges)
        }
    }

}

impl TryFrom<&serde_json::Value> for ProcessGraph {
    type Error = ErrorCode;
    fn try_from(value: &serde_json::Value) -> Result<Self, ErrorCode> {
        let nodes = value
            .get("nodes")
            .and_then(|x| x.as_array())
            .ok_or_else(|| {
                ErrorCode::Deserialization("ProcessGraph: nodes not found or not array")
            })?
            .iter()
            .map(Node::try_from)
            .collect::<RelayResult<Vec<_>>>()?;

        // Optional, a single-node process has no edge
        let edges = match value.get("edges") {
            None | Some(serde_json::Value::Null) => Vec::default(),
            Some(edges) => edges
                .as_array()
                .ok_or_else(|| ErrorCode::Deserialization("ProcessGraph: edges not a array"))?
                .iter()
                .map(Edge::try_from)
                .collect::<RelayResult<Vec<_>>>()?,
        };

        Self::new(nodes, edges)
    }
}

impl std::str::FromStr for ProcessGraph {
    type Err = ErrorCode;
    fn from_str(structure: &str) -> Result<Self, ErrorCode> {
        let value: serde_json::Value = serde_json::from_str(structure)?;
        ProcessGraph::try_from(&value)
    }
}
