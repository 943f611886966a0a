pub type Time = u64;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Order {
  pub name: String,
  pub location: usize,
  pub delivery_time_limit: Time,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Restaurant {
  pub name: String,
  pub location: usize,
  pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TestCase {
  pub grid_size: usize,
  pub num_riders: usize,
  pub restaurants: Vec<Restaurant>,
}

/// A whole input text: the test case count followed by that many test cases.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Batch {
  pub cases: Vec<TestCase>,
}
