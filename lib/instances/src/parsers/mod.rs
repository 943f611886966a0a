mod delivery;
pub use delivery::{BatchFmt, BatchText};


mod nom_prelude {
  pub use nom::{
    IResult,
    error::{
      self,
      ParseError,
      context,
    },
    sequence::*,
    multi::*,
    combinator::*,
    character::complete::*,
    bytes::complete::is_not,
    Finish,
  };
  pub use std::str::FromStr;
  pub use std::num::ParseIntError;
}

mod common;

pub trait ParseInstance<Fmt>: Sized {
  fn parse(inputs: Fmt) -> crate::Result<Self>;
}
