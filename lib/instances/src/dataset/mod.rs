use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::{Error, Map};
use std::borrow::Cow;


/// Environment variable naming the directory which holds all datasets.
pub const DATA_ROOT_VAR: &str = "DATA_ROOT";

pub trait IdxNameMap {
  fn index_to_name(&self, idx: usize) -> Result<Cow<str>>;

  fn name_to_index(&self, name: &str) -> Result<usize>;

  fn len(&self) -> usize;

  fn is_empty(&self) -> bool { self.len() == 0 }

  fn check_idx(&self, idx: usize) -> Result<()> {
    if self.len() <= idx {
      Err(Error::IndexOutOfRange.into())
    } else {
      Ok(())
    }
  }
}


impl<'a, D: IdxNameMap> IdxNameMap for &'a D {
  fn index_to_name(&self, idx: usize) -> Result<Cow<str>> {
    D::index_to_name(self, idx)
  }

  fn name_to_index(&self, name: &str) -> Result<usize> {
    D::name_to_index(self, name)
  }

  fn len(&self) -> usize {
    D::len(self)
  }
}

pub trait Dataset: IdxNameMap {
  type Instance;
  fn load_instance(&self, idx: usize) -> Result<Self::Instance>;
}


impl<'a, D: Dataset> Dataset for &'a D {
  type Instance = D::Instance;

  fn load_instance(&self, idx: usize) -> Result<Self::Instance> {
    D::load_instance(self, idx)
  }
}


/// A Standard Layout Dataset: a directory containing instance files and `INDEX.txt` index file.
/// The index file contains a whitespace separated list of instance names, which acts as a map from index -> name.
/// Each instance file is named `NAME.SUFFIX`.
pub struct StdLayout<D> {
  _marker: PhantomData<D>,
  name_order: Vec<String>,
  name_to_idx_map: Map<String, usize>,
  dir: PathBuf,
  suffix: String,
}


impl<D> StdLayout<D> {
  pub fn new(dir: impl AsRef<Path>, suffix: &str) -> Result<StdLayout<D>> {
    let dir = dir.as_ref();
    let ctx = format!("try read directory {:?}", dir);
    let dir = dir.canonicalize().context(ctx)?;

    let index = dir.join("INDEX.txt");
    let contents = std::fs::read_to_string(&index).context(format!("failed to read {:?}", index))?;
    let name_order: Vec<String> = contents.split_whitespace().map(|s| s.trim().to_string()).collect();
    let name_to_idx_map: Map<_, _> = name_order.iter().enumerate().map(|(i, s)| (s.clone(), i)).collect();

    Ok(StdLayout {
      _marker: PhantomData {},
      name_order,
      name_to_idx_map,
      dir,
      suffix: suffix.to_string(),
    })
  }

  /// Open `$DATA_ROOT/<dir>`.
  pub fn from_env(dir: impl AsRef<Path>, suffix: &str) -> Result<StdLayout<D>> {
    let root = std::env::var(DATA_ROOT_VAR)
      .context(format!("environment variable {} must be defined", DATA_ROOT_VAR))?;
    Self::new(Path::new(&root).join(dir), suffix)
  }

  /// Path of the file holding instance `idx`.
  pub fn instance_path(&self, idx: usize) -> Result<PathBuf> {
    let instance = self.index_to_name(idx)?;
    let mut path = self.dir.join(&*instance);
    path.set_extension(&self.suffix);
    Ok(path)
  }
}

impl<D> IdxNameMap for StdLayout<D> {
  fn index_to_name(&self, idx: usize) -> Result<Cow<str>> {
    self.check_idx(idx)?;
    Ok(Cow::Borrowed(&self.name_order[idx]))
  }

  fn name_to_index(&self, name: &str) -> Result<usize> {
    self.name_to_idx_map.get(name).ok_or_else(|| Error::UnkownInstanceName.into()).map(|i| *i)
  }

  fn len(&self) -> usize { self.name_order.len() }
}


pub mod delivery;
