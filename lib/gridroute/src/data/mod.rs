use std::borrow::Cow;
use std::path::Path;
use anyhow::{Context, Result};
use instances::dataset::{Dataset, StdLayout};
use instances::dataset::delivery::DeliveryBatches;
use instances::parsers::{ParseInstance, BatchFmt, BatchText};
use instances::raw::{self, FromRaw};

pub mod delivery;

/// Directory of the delivery dataset, relative to `$DATA_ROOT`.
pub const DATASET_DIR: &str = "deliveries";

pub fn dataset() -> Result<StdLayout<DeliveryBatches>> {
  StdLayout::from_env(DATASET_DIR, "txt")
}

pub fn get_batch_by_index(idx : usize) -> Result<delivery::Batch> {
  dataset()?.load_instance(idx)
}

pub fn load_batch_file(path: impl AsRef<Path>) -> Result<delivery::Batch> {
  let path = path.as_ref();
  let raw = raw::delivery::Batch::parse(BatchFmt(path)).context(format!("failed to load {:?}", path))?;
  let id = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or(Cow::Borrowed("batch"));
  delivery::Batch::from_raw(raw, id)
}

/// Parse a batch held in memory; `id` names it in test case ids.
pub fn parse_batch(text: &str, id: &str) -> Result<delivery::Batch> {
  let raw = raw::delivery::Batch::parse(BatchText(text))?;
  delivery::Batch::from_raw(raw, Cow::Borrowed(id))
}
