pub mod delivery;
use std::borrow::Cow;

pub trait FromRaw<T> where Self: Sized {
  fn from_raw(raw: T, id: Cow<str>) -> crate::Result<Self>;
}
