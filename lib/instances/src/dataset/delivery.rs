use super::*;
use crate::parsers::{ParseInstance, BatchFmt};
use crate::raw::{self, FromRaw};
use std::ops::Range;
use itertools::Itertools;

pub use crate::raw::delivery::Time;
/// 1-based linear index into the N x N grid.
pub type Loc = usize;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Order {
  pub name: String,
  pub location: Loc,
  pub delivery_time_limit: Time,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Restaurant {
  pub name: String,
  pub location: Loc,
  /// Orders listed under this restaurant in the input, as a range of `DeliveryInstance::orders`.
  pub orders: Range<usize>,
}

/// One validated test case: every location lies in `1..=n*n`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeliveryInstance {
  pub id: String,
  pub n: usize,
  pub riders: usize,
  pub restaurants: Vec<Restaurant>,
  pub orders: Vec<Order>,
}

impl DeliveryInstance {
  pub fn restaurant_locations(&self) -> Vec<Loc> {
    self.restaurants.iter().map(|r| r.location).collect_vec()
  }

  pub fn order_locations(&self) -> Vec<Loc> {
    self.orders.iter().map(|o| o.location).collect_vec()
  }

  /// The orders that were listed under restaurant `r` in the input.
  pub fn listed_orders(&self, r: usize) -> &[Order] {
    &self.orders[self.restaurants[r].orders.clone()]
  }
}

fn check_location(location: Loc, max: usize) -> Result<Loc> {
  if location == 0 || location > max {
    Err(Error::LocationOutOfRange { location, max }.into())
  } else {
    Ok(location)
  }
}

impl FromRaw<raw::delivery::TestCase> for DeliveryInstance {
  fn from_raw(raw: raw::delivery::TestCase, id: Cow<str>) -> Result<DeliveryInstance> {
    if raw.grid_size == 0 {
      return Err(anyhow::Error::from(Error::EmptyGrid).context(format!("test case {}", id)));
    }
    let max = raw.grid_size.checked_mul(raw.grid_size)
      .ok_or(Error::GridTooLarge { n: raw.grid_size })
      .context(format!("test case {}", id))?;

    let mut restaurants = Vec::with_capacity(raw.restaurants.len());
    let mut orders = Vec::new();
    for r in raw.restaurants {
      let location = check_location(r.location, max)
        .context(format!("test case {}: restaurant {}", id, r.name))?;
      let first = orders.len();
      for o in r.orders {
        let order_location = check_location(o.location, max)
          .context(format!("test case {}: order {}", id, o.name))?;
        orders.push(Order { name: o.name, location: order_location, delivery_time_limit: o.delivery_time_limit });
      }
      restaurants.push(Restaurant { name: r.name, location, orders: first..orders.len() });
    }

    Ok(DeliveryInstance {
      id: id.into_owned(),
      n: raw.grid_size,
      riders: raw.num_riders,
      restaurants,
      orders,
    })
  }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Batch {
  pub id: String,
  pub cases: Vec<DeliveryInstance>,
}

impl FromRaw<raw::delivery::Batch> for Batch {
  fn from_raw(raw: raw::delivery::Batch, id: Cow<str>) -> Result<Batch> {
    let cases = raw.cases.into_iter()
      .enumerate()
      .map(|(k, case)| DeliveryInstance::from_raw(case, Cow::Owned(format!("{}#{}", id, k + 1))))
      .collect::<Result<Vec<_>>>()?;
    Ok(Batch { id: id.into_owned(), cases })
  }
}

pub enum DeliveryBatches {}

impl Dataset for StdLayout<DeliveryBatches> {
  type Instance = Batch;

  fn load_instance(&self, idx: usize) -> Result<Self::Instance> {
    let instance = self.index_to_name(idx)?;
    let path = self.instance_path(idx)?;
    let raw = raw::delivery::Batch::parse(BatchFmt(&path)).context(format!("failed to load {:?}", path))?;
    Batch::from_raw(raw, instance)
  }
}
