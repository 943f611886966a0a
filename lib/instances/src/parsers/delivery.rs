use std::path::Path;
use crate::Result;
use crate::raw::delivery::*;
use super::{
  ParseInstance,
  nom_prelude::*,
};

/// A batch stored in a file on disk.
#[derive(Debug, Copy, Clone)]
pub struct BatchFmt<P>(pub P);

/// A batch already held in memory, e.g. read from stdin.
#[derive(Debug, Copy, Clone)]
pub struct BatchText<'a>(pub &'a str);

impl<P: AsRef<Path>> ParseInstance<BatchFmt<P>> for Batch {
  fn parse(input: BatchFmt<P>) -> Result<Self> {
    let path = input.0.as_ref();
    let data = std::fs::read_to_string(path)?;
    Batch::parse(BatchText(&data))
  }
}

impl<'a> ParseInstance<BatchText<'a>> for Batch {
  fn parse(input: BatchText<'a>) -> Result<Self> {
    match parsers::batch(input.0).finish() {
      Ok((_, batch)) => Ok(batch),
      Err(e) => Err(
        anyhow::Error::msg(e.to_string())
      ),
    }
  }
}

mod parsers {
  use super::*;
  use super::super::common::*;

  type Res<'a, T> = IResult<&'a str, T, error::VerboseError<&'a str>>;

  fn order(i: &str) -> Res<'_, Order> {
    let (i, name) = context("order name", ws_name)(i)?;
    let (i, location) = context("order location", ws_usize)(i)?;
    let (i, delivery_time_limit) = context("delivery time limit", ws_time)(i)?;
    Ok((i, Order { name, location, delivery_time_limit }))
  }

  fn restaurant(i: &str) -> Res<'_, Restaurant> {
    let (i, name) = context("restaurant name", ws_name)(i)?;
    let (i, location) = context("restaurant location", ws_usize)(i)?;
    let (i, num_orders) = context("order count", ws_usize)(i)?;
    let (i, orders) = count(order, num_orders)(i)?;
    Ok((i, Restaurant { name, location, orders }))
  }

  fn test_case(i: &str) -> Res<'_, TestCase> {
    let (i, (grid_size, num_riders, num_restaurants)) = context("test case header",
      tuple((ws_usize, ws_usize, ws_usize)))(i)?;
    let (i, restaurants) = count(restaurant, num_restaurants)(i)?;
    Ok((i, TestCase { grid_size, num_riders, restaurants }))
  }

  pub fn batch(input: &str) -> Res<'_, Batch> {
    let (i, num_cases) = context("test case count", ws_usize)(input)?;
    let (i, cases) = count(test_case, num_cases)(i)?;
    let (i, _) = multispace0(i)?;
    let (i, _) = eof(i)?;
    Ok((i, Batch { cases }))
  }
}
