use std::cmp::min;
use std::fmt;
use itertools::Itertools;
use tracing::*;

use crate::data::delivery::*;
use crate::graph::{Graph, build_graph, node};
use crate::shortest_path::{dijkstra, DistanceTable};

/// How per-restaurant delivery times are combined into the total.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Dispatch {
    /// One restaurant: the worst order, doubled for the return trip.
    SingleRestaurant,
    /// At least one rider per restaurant: restaurant times are summed.
    RiderPerRestaurant,
    /// Fewer riders than restaurants: rider slot `k` takes the largest `k`-th
    /// delivery time over all restaurants.
    ScarceRiders,
}

impl Dispatch {
    pub fn select(num_restaurants: usize, riders: usize) -> Self {
        if num_restaurants == 1 {
            Dispatch::SingleRestaurant
        } else if riders >= num_restaurants {
            Dispatch::RiderPerRestaurant
        } else {
            Dispatch::ScarceRiders
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dispatch::SingleRestaurant => "single_restaurant",
            Dispatch::RiderPerRestaurant => "rider_per_restaurant",
            Dispatch::ScarceRiders => "scarce_riders",
        }
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per order, the shortest distance capped at the order's limit. Unreachable
/// orders collapse to their limit.
pub fn capped_delivery_times(table: &DistanceTable, orders: &[Order]) -> Vec<Time> {
    orders.iter()
        .map(|o| min(table.to_location(o.location), o.delivery_time_limit))
        .collect_vec()
}

/// The bottleneck order: the largest capped delivery time, 0 without orders.
pub fn delivery_time(table: &DistanceTable, orders: &[Order]) -> Time {
    capped_delivery_times(table, orders).into_iter().max().unwrap_or(0)
}

pub fn delivery_time_for_rider(graph: &Graph, rider_location: Loc, orders: &[Order]) -> Time {
    let table = dijkstra(graph, node(rider_location));
    return delivery_time(&table, orders);
}

fn sorted_delivery_times(table: &DistanceTable, orders: &[Order]) -> Vec<Time> {
    capped_delivery_times(table, orders).into_iter().sorted_by(|a, b| b.cmp(a)).collect_vec()
}

/// For each restaurant, its capped delivery times sorted from largest to smallest.
pub fn rider_delivery_times(graph: &Graph, restaurant_locations: &[Loc], orders: &[Order]) -> Vec<Vec<Time>> {
    restaurant_locations.iter()
        .map(|&r| sorted_delivery_times(&dijkstra(graph, node(r)), orders))
        .collect_vec()
}

/// Sum over the first `riders` slots of the largest slot value across restaurants.
/// A restaurant with no entry for a slot contributes 0 to it.
fn fill_rider_slots(sorted_times: &[Vec<Time>], riders: usize) -> Time {
    (0..riders)
        .map(|k| sorted_times.iter()
            .map(|times| times.get(k).copied().unwrap_or(0))
            .max()
            .unwrap_or(0))
        .sum()
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeliverySummary {
    pub dispatch: Dispatch,
    pub total_time: Time,
    /// Worst capped delivery time of each restaurant over all orders.
    pub restaurant_times: Vec<Time>,
}

fn summarise(graph: &Graph, restaurant_locations: &[Loc], orders: &[Order], riders: usize) -> DeliverySummary {
    let dispatch = Dispatch::select(restaurant_locations.len(), riders);
    debug!(%dispatch, restaurants=restaurant_locations.len(), riders, orders=orders.len());

    let restaurant_times = restaurant_locations.iter()
        .map(|&r| delivery_time_for_rider(graph, r, orders))
        .collect_vec();

    let total_time = match dispatch {
        Dispatch::SingleRestaurant => {
            let restaurant = restaurant_locations[0];
            let worst = orders.iter()
                .map(|o| delivery_time_for_rider(graph, restaurant, std::slice::from_ref(o)))
                .max()
                .unwrap_or(0);
            worst * 2
        },
        Dispatch::RiderPerRestaurant => restaurant_times.iter().sum(),
        Dispatch::ScarceRiders => {
            let sorted = rider_delivery_times(graph, restaurant_locations, orders);
            trace!(?sorted, "rider delivery times");
            fill_rider_slots(&sorted, riders)
        },
    };

    DeliverySummary { dispatch, total_time, restaurant_times }
}

/// Total minimum time over all orders for `riders` riders on an `n` x `n` grid.
#[instrument(level="debug", skip(restaurant_locations, orders))]
pub fn total_time(restaurant_locations: &[Loc], orders: &[Order], n: usize, riders: usize) -> Time {
    let graph = build_graph(n, orders, restaurant_locations);
    return summarise(&graph, restaurant_locations, orders, riders).total_time;
}

#[instrument(level="info", skip(instance), fields(id=%instance.id))]
pub fn solve(instance: &DeliveryInstance) -> DeliverySummary {
    let restaurant_locations = instance.restaurant_locations();
    let graph = build_graph(instance.n, &instance.orders, &restaurant_locations);
    let summary = summarise(&graph, &restaurant_locations, &instance.orders, instance.riders);
    info!(total_time=summary.total_time, dispatch=%summary.dispatch, "solved");
    return summary;
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_batch;
    use crate::init_test_logging;
    use proptest::prelude::*;

    fn order(location: Loc, delivery_time_limit: Time) -> Order {
        Order { name: format!("o{}", location), location, delivery_time_limit }
    }

    #[test]
    fn dispatch_selection() {
        assert_eq!(Dispatch::select(1, 0), Dispatch::SingleRestaurant);
        assert_eq!(Dispatch::select(1, 5), Dispatch::SingleRestaurant);
        assert_eq!(Dispatch::select(0, 1), Dispatch::RiderPerRestaurant);
        assert_eq!(Dispatch::select(3, 3), Dispatch::RiderPerRestaurant);
        assert_eq!(Dispatch::select(3, 2), Dispatch::ScarceRiders);
        assert_eq!(Dispatch::select(3, 1), Dispatch::ScarceRiders);
    }

    #[test]
    fn single_restaurant_round_trip() {
        let _g = init_test_logging(None::<&str>);
        assert_eq!(total_time(&[5], &[order(1, 10)], 3, 1), 4);
    }

    #[test]
    fn single_restaurant_capped() {
        assert_eq!(total_time(&[1], &[order(9, 3), order(2, 10)], 3, 2), 6);
    }

    #[test]
    fn no_orders() {
        assert_eq!(total_time(&[5], &[], 3, 1), 0);
        assert_eq!(total_time(&[1, 9], &[], 3, 1), 0);
        assert_eq!(total_time(&[], &[], 3, 1), 0);
    }

    #[test]
    fn riders_cover_restaurants() {
        let orders = vec![order(1, 0), order(9, 0)];
        assert_eq!(total_time(&[1, 9], &orders, 3, 2), 0);
        // every restaurant serves every order: each also reaches the far corner
        let orders = vec![order(1, 10), order(9, 10)];
        assert_eq!(total_time(&[1, 9], &orders, 3, 2), 8);
    }

    fn scarce_orders() -> Vec<Order> {
        vec![order(3, 10), order(2, 10)]
    }

    #[test]
    fn rider_times_sorted() {
        let orders = scarce_orders();
        let graph = build_graph(3, &orders, &[1, 5, 9]);
        assert_eq!(rider_delivery_times(&graph, &[1, 5, 9], &orders), vec![vec![2, 1], vec![2, 1], vec![3, 2]]);
        assert_eq!(delivery_time_for_rider(&graph, 9, &orders), 3);
    }

    #[test]
    fn scarce_riders() {
        let orders = scarce_orders();
        assert_eq!(total_time(&[1, 5, 9], &orders, 3, 1), 3);
        assert_eq!(total_time(&[1, 5, 9], &orders, 3, 2), 3 + 2);
        assert_eq!(total_time(&[1, 5, 9], &orders, 3, 3), 2 + 2 + 3);
    }

    #[test]
    fn missing_slots_count_zero() {
        let sorted = vec![vec![4], vec![3, 1]];
        assert_eq!(fill_rider_slots(&sorted, 3), 4 + 1);
        assert_eq!(fill_rider_slots(&sorted, 0), 0);
    }

    #[test]
    fn unreachable_order_collapses_to_limit() {
        let mut graph = Graph::with_nodes(2);
        graph.add_edge(0, 0, 0);
        let table = dijkstra(&graph, 0);
        assert_eq!(capped_delivery_times(&table, &[order(2, 7), order(1, 7)]), vec![7, 0]);
    }

    #[test]
    fn solve_instance() -> anyhow::Result<()> {
        let batch = parse_batch("1\n3 1 3\nA 1 1\nx 3 10\nB 5 1\ny 2 10\nC 9 0\n", "scarce")?;
        let summary = solve(&batch.cases[0]);
        assert_eq!(summary.dispatch, Dispatch::ScarceRiders);
        assert_eq!(summary.total_time, 3);
        assert_eq!(summary.restaurant_times, vec![2, 2, 3]);
        Ok(())
    }

    proptest! {
        #[test]
        fn solve_agrees_with_rider_times(
            restaurants in prop::collection::vec(1..=16usize, 1..5),
            orders in prop::collection::vec((1..=16usize, 0..10u64), 0..5),
            riders in 0..6usize,
        ) {
            let orders = orders.into_iter().map(|(l, t)| order(l, t)).collect_vec();
            let graph = build_graph(4, &orders, &restaurants);
            let summary = summarise(&graph, &restaurants, &orders, riders);
            let per_restaurant = restaurants.iter().map(|&r| delivery_time_for_rider(&graph, r, &orders)).collect_vec();
            prop_assert_eq!(&summary.restaurant_times, &per_restaurant);

            let sorted = rider_delivery_times(&graph, &restaurants, &orders);
            for (times, &worst) in sorted.iter().zip(&per_restaurant) {
                prop_assert_eq!(times.first().copied().unwrap_or(0), worst);
            }
            let expected = match summary.dispatch {
                Dispatch::SingleRestaurant => 2 * per_restaurant[0],
                Dispatch::RiderPerRestaurant => per_restaurant.iter().sum(),
                Dispatch::ScarceRiders => fill_rider_slots(&sorted, riders),
            };
            prop_assert_eq!(summary.total_time, expected);
        }

        #[test]
        fn capped_by_largest_limit(
            n in 1..6usize,
            restaurant in 0..36usize,
            orders in prop::collection::vec((0..36usize, 0..20u64), 0..6),
            riders in 1..4usize,
        ) {
            let cells = n * n;
            let restaurant = restaurant % cells + 1;
            let orders = orders.into_iter().map(|(l, t)| order(l % cells + 1, t)).collect_vec();
            let graph = build_graph(n, &orders, &[restaurant]);
            let max_limit = orders.iter().map(|o| o.delivery_time_limit).max().unwrap_or(0);
            prop_assert!(delivery_time_for_rider(&graph, restaurant, &orders) <= max_limit);
            prop_assert!(total_time(&[restaurant], &orders, n, riders) <= 2 * max_limit);
        }

        #[test]
        fn single_rider_takes_worst_restaurant(
            restaurants in prop::collection::vec(1..=16usize, 2..5),
            orders in prop::collection::vec((1..=16usize, 0..10u64), 1..5),
        ) {
            let orders = orders.into_iter().map(|(l, t)| order(l, t)).collect_vec();
            let graph = build_graph(4, &orders, &restaurants);
            let worst = restaurants.iter().map(|&r| delivery_time_for_rider(&graph, r, &orders)).max().unwrap();
            prop_assert_eq!(total_time(&restaurants, &orders, 4, 1), worst);
        }
    }
}
