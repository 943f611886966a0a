use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::*;

use crate::data::delivery::*;
use crate::graph::{Graph, Node, node};

/// Distance of a node the source cannot reach.
pub const UNREACHABLE: Time = Time::MAX;

/// Shortest distances from one source to every node of a graph.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DistanceTable {
    dist: Vec<Time>,
}

impl DistanceTable {
    fn new(num_nodes: usize, source: Node) -> Self {
        let mut dist = vec![UNREACHABLE; num_nodes];
        dist[source] = 0;
        DistanceTable { dist }
    }

    /// Raw distance, [`UNREACHABLE`] included.
    #[inline]
    pub fn distance(&self, node: Node) -> Time {
        self.dist[node]
    }

    #[inline]
    pub fn to_location(&self, location: Loc) -> Time {
        self.distance(node(location))
    }
}

/// Single-source shortest paths. Superseded frontier entries are left in the
/// heap and skipped when popped.
#[instrument(level="trace", skip(graph))]
pub fn dijkstra(graph: &Graph, source: Node) -> DistanceTable {
    let mut table = DistanceTable::new(graph.num_nodes(), source);
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0, source)));

    while let Some(Reverse((d, u))) = frontier.pop() {
        if d > table.dist[u] {
            continue;
        }
        for edge in graph.edges(u) {
            let candidate = d + edge.weight;
            if candidate < table.dist[edge.to] {
                table.dist[edge.to] = candidate;
                frontier.push(Reverse((candidate, edge.to)));
            }
        }
    }

    trace!(reachable=table.dist.iter().filter(|&&d| d != UNREACHABLE).count(), "frontier exhausted");
    return table;
}
