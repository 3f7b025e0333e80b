use std::{fmt::Debug, sync::Arc};

use crate::{FilenameTemplate, PathData};

pub type PathProducer = dyn Fn(&PathData<'_>) -> String + Send + Sync;

/// An asset path as it flows through the `asset_path` hook.
///
/// Integrators may hand the host a function instead of a string; it is only called once the
/// path data is known.
#[derive(Clone)]
pub enum PathTemplate {
  Static(String),
  Producer(Arc<PathProducer>),
}

impl PathTemplate {
  pub fn producer<F>(producer: F) -> Self
  where
    F: Fn(&PathData<'_>) -> String + Send + Sync + 'static,
  {
    Self::Producer(Arc::new(producer))
  }

  /// Calls the producer if there is one.
  pub fn resolve(self, data: &PathData<'_>) -> String {
    match self {
      Self::Static(path) => path,
      Self::Producer(producer) => producer(data),
    }
  }

  pub fn as_static(&self) -> Option<&str> {
    match self {
      Self::Static(path) => Some(path),
      Self::Producer(_) => None,
    }
  }
}

impl Debug for PathTemplate {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Static(path) => f.debug_tuple("Static").field(path).finish(),
      Self::Producer(_) => f.debug_tuple("Producer").field(&"Fn").finish(),
    }
  }
}

impl From<String> for PathTemplate {
  fn from(value: String) -> Self {
    Self::Static(value)
  }
}

impl From<&str> for PathTemplate {
  fn from(value: &str) -> Self {
    Self::Static(value.to_string())
  }
}

impl From<FilenameTemplate> for PathTemplate {
  fn from(value: FilenameTemplate) -> Self {
    Self::Static(value.into_string())
  }
}
