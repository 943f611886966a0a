//! Weighted grid city graph with restaurant-to-order shortcut edges.
use tracing::*;

use crate::data::delivery::*;

/// 0-based node id, `location - 1`.
pub type Node = usize;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Edge {
    pub to: Node,
    pub weight: Time,
}

/// Undirected adjacency list. Parallel edges are kept.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn with_nodes(num_nodes: usize) -> Self {
        Graph { adj: vec![Vec::new(); num_nodes] }
    }

    /// The 4-connected N x N lattice with unit weights.
    ///
    /// Every cell adds an edge to each of its neighbours, so each adjacency is
    /// inserted once from either end and appears twice in both lists.
    pub fn grid(n: usize) -> Self {
        let mut graph = Graph::with_nodes(n * n);
        for i in 0..n * n {
            let row = i / n;
            let col = i % n;

            if row > 0 { graph.add_edge(i, i - n, 1); }
            if row < n - 1 { graph.add_edge(i, i + n, 1); }
            if col > 0 { graph.add_edge(i, i - 1, 1); }
            if col < n - 1 { graph.add_edge(i, i + 1, 1); }
        }
        return graph;
    }

    #[inline]
    pub fn add_edge(&mut self, from: Node, to: Node, weight: Time) {
        self.adj[from].push(Edge { to, weight });
        self.adj[to].push(Edge { to: from, weight });
    }

    #[inline]
    pub fn edges(&self, node: Node) -> &[Edge] {
        &self.adj[node]
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges, counting parallel edges and self loops.
    pub fn num_edges(&self) -> usize {
        let self_loops: usize = self.adj.iter().enumerate()
            .map(|(u, edges)| edges.iter().filter(|e| e.to == u).count())
            .sum();
        let endpoints: usize = self.adj.iter().map(Vec::len).sum();
        // a self loop contributes two entries to the same list
        return (endpoints - self_loops) / 2 + self_loops / 2;
    }
}

/// Node id of a 1-based grid location.
#[inline]
pub fn node(location: Loc) -> Node {
    debug_assert!(location > 0);
    location - 1
}

/// Shortcut weight: difference of the linear indices, not a grid distance.
#[inline]
pub fn shortcut_weight(restaurant: Loc, order: Loc) -> Time {
    restaurant.abs_diff(order) as Time
}

/// Lattice plus a shortcut from every restaurant to every order, whichever
/// restaurant the order was placed with.
#[instrument(level="debug", skip(orders, restaurant_locations), fields(orders=orders.len(), restaurants=restaurant_locations.len()))]
pub fn build_graph(n: usize, orders: &[Order], restaurant_locations: &[Loc]) -> Graph {
    let mut graph = Graph::grid(n);

    for &restaurant in restaurant_locations {
        for order in orders {
            let customer = order.location;
            graph.add_edge(node(restaurant), node(customer), shortcut_weight(restaurant, customer));
        }
    }
    debug!(nodes=graph.num_nodes(), edges=graph.num_edges(), "graph built");
    return graph;
}


#[cfg(test)]
mod tests {
    use super::*;

    fn order(location: Loc) -> Order {
        Order { name: format!("o{}", location), location, delivery_time_limit: 10 }
    }

    #[test]
    fn grid_degrees() {
        let graph = Graph::grid(3);
        assert_eq!(graph.num_nodes(), 9);
        // corner, edge and centre cells, each neighbour listed twice
        assert_eq!(graph.edges(0).len(), 4);
        assert_eq!(graph.edges(1).len(), 6);
        assert_eq!(graph.edges(4).len(), 8);
        assert!(graph.edges(4).iter().all(|e| e.weight == 1));
        assert_eq!(graph.num_edges(), 24);
    }

    #[test]
    fn single_cell() {
        let graph = Graph::grid(1);
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn shortcuts_for_every_pair() {
        let orders = vec![order(4), order(9)];
        let graph = build_graph(3, &orders, &[1, 3]);
        assert_eq!(graph.num_edges(), 24 + 4);
        assert!(graph.edges(0).contains(&Edge { to: 3, weight: 3 }));
        assert!(graph.edges(3).contains(&Edge { to: 0, weight: 3 }));
        assert!(graph.edges(2).contains(&Edge { to: 3, weight: 1 }));
        assert!(graph.edges(2).contains(&Edge { to: 8, weight: 6 }));
    }

    #[test]
    fn order_on_restaurant_is_self_loop() {
        let graph = build_graph(2, &[order(2)], &[2]);
        assert!(graph.edges(1).contains(&Edge { to: 1, weight: 0 }));
        assert_eq!(graph.num_edges(), 8 + 1);
    }

    #[test]
    fn weight_is_index_difference() {
        assert_eq!(shortcut_weight(3, 4), 1);
        assert_eq!(shortcut_weight(4, 3), 1);
        assert_eq!(shortcut_weight(9, 1), 8);
    }
}
