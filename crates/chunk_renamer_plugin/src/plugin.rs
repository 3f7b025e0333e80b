use std::{borrow::Cow, fmt::Debug, sync::Arc};

use crate::Compiler;

/// Something that hooks itself into a [`Compiler`].
///
/// `apply` runs once per compiler, right after the compiler is created. Plugins don't get
/// called back directly afterwards; whatever they want to do has to be registered as taps on
/// `compiler.hooks` from inside `apply`.
pub trait Plugin: Debug + Send + Sync {
  /// Used as the tap name of everything the plugin registers.
  fn name(&self) -> Cow<'static, str>;

  fn apply(&self, compiler: &mut Compiler) -> anyhow::Result<()>;
}

pub type SharedPlugin = Arc<dyn Plugin>;
