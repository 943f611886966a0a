pub use instances::dataset::delivery::{
  Time,
  Loc,
  Order,
  Restaurant,
  Batch,
};

pub type DeliveryInstance = instances::dataset::delivery::DeliveryInstance;
