use std::fmt;

use crate::Set;
use crate::data::delivery::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Marker {
    Empty,
    Restaurant,
    Order,
    /// An order placed on a restaurant's own cell. Orders win over restaurants.
    OrderAtRestaurant,
}

impl Marker {
    pub fn glyph(&self) -> char {
        match self {
            Marker::Empty => '-',
            Marker::Restaurant => 'R',
            Marker::Order => '0',
            Marker::OrderAtRestaurant => 'O',
        }
    }
}

/// Character map of an N x N city.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GridMap {
    n: usize,
    cells: Vec<Marker>,
}

impl GridMap {
    pub fn render(n: usize, restaurant_locations: &[Loc], order_locations: &[Loc]) -> Self {
        let restaurants: Set<Loc> = restaurant_locations.iter().copied().collect();
        let orders: Set<Loc> = order_locations.iter().copied().collect();

        let cells = (1..=n * n)
            .map(|loc| match (restaurants.contains(&loc), orders.contains(&loc)) {
                (false, false) => Marker::Empty,
                (true, false) => Marker::Restaurant,
                (false, true) => Marker::Order,
                (true, true) => Marker::OrderAtRestaurant,
            })
            .collect();
        GridMap { n, cells }
    }

    pub fn of_instance(instance: &DeliveryInstance) -> Self {
        Self::render(instance.n, &instance.restaurant_locations(), &instance.order_locations())
    }

    #[inline]
    pub fn marker(&self, row: usize, col: usize) -> Marker {
        self.cells[row * self.n + col]
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n {
            for col in 0..self.n {
                write!(f, "{:>3} ", self.marker(row, col).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
