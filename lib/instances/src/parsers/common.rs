use super::nom_prelude::*;
use crate::raw::delivery::Time;

pub fn usize_<'a, E>(input: &'a str) -> IResult<&'a str, usize, E>
  where
    E: ParseError<&'a str> + error::FromExternalError<&'a str, ParseIntError>
{
  map_res(digit1, usize::from_str)(input)
}

pub fn time<'a, E>(input: &'a str) -> IResult<&'a str, Time, E>
  where
    E: ParseError<&'a str> + error::FromExternalError<&'a str, ParseIntError>
{
  map_res(digit1, Time::from_str)(input)
}

/// Unsigned integer preceded by any amount of whitespace (including newlines).
pub fn ws_usize<'a, E>(input: &'a str) -> IResult<&'a str, usize, E>
  where
    E: ParseError<&'a str> + error::FromExternalError<&'a str, ParseIntError>
{
  preceded(multispace0, usize_)(input)
}

pub fn ws_time<'a, E>(input: &'a str) -> IResult<&'a str, Time, E>
  where
    E: ParseError<&'a str> + error::FromExternalError<&'a str, ParseIntError>
{
  preceded(multispace0, time)(input)
}

/// A whitespace-delimited word, such as a restaurant or customer name.
pub fn ws_name<'a, E>(input: &'a str) -> IResult<&'a str, String, E>
  where
    E: ParseError<&'a str>
{
  map(preceded(multispace0, is_not(" \t\r\n")), String::from)(input)
}
