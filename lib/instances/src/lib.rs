pub use anyhow::Result;

use std::fmt;
use fnv::FnvHashMap as Map;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    UnkownInstanceName,
    IndexOutOfRange,
    EmptyGrid,
    GridTooLarge { n: usize },
    LocationOutOfRange { location: usize, max: usize },
}


impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}


pub mod dataset;
pub mod raw;

pub mod parsers;
