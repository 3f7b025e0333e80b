use std::{borrow::Cow, sync::LazyLock};

use anyhow::bail;
use regex::{NoExpand, Regex};

static LC_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\[lc-name\]").unwrap());

/// Replaces every `[lc-name]`, in any casing, with the lower-cased `chunk_name`.
///
/// A path without the placeholder is returned untouched even when there is no chunk name.
pub fn replace_lc_name<'a>(
  path: &'a str,
  chunk_name: Option<&str>,
) -> anyhow::Result<Cow<'a, str>> {
  if !LC_NAME_RE.is_match(path) {
    return Ok(Cow::Borrowed(path));
  }
  let Some(chunk_name) = chunk_name else {
    bail!("Cannot replace `[lc-name]` in `{path}`: the chunk has neither a name nor an id");
  };
  let lower_cased = chunk_name.to_lowercase();
  Ok(LC_NAME_RE.replace_all(path, NoExpand(&lower_cased)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn replaces_every_occurrence_in_any_casing() {
    let path = replace_lc_name("[LC-Name]/[lc-name]", Some("Console")).unwrap();
    assert_eq!(path, "console/console");

    let path = replace_lc_name("js/[LC-NAME].[chunkhash].js", Some("VendorLibs")).unwrap();
    assert_eq!(path, "js/vendorlibs.[chunkhash].js");
  }

  #[test]
  fn path_without_placeholder_is_borrowed() {
    let path = replace_lc_name("[name].js", Some("Console")).unwrap();
    assert!(matches!(path, Cow::Borrowed("[name].js")));

    let path = replace_lc_name("[name].js", None).unwrap();
    assert_eq!(path, "[name].js");
  }

  #[test]
  fn chunk_name_is_not_expanded_as_a_capture_reference() {
    let path = replace_lc_name("[lc-name].js", Some("$1Chunk")).unwrap();
    assert_eq!(path, "$1chunk.js");
  }

  #[test]
  fn missing_chunk_name_is_an_error() {
    let error = replace_lc_name("[lc-name].js", None).unwrap_err();
    assert_eq!(
      error.to_string(),
      "Cannot replace `[lc-name]` in `[lc-name].js`: the chunk has neither a name nor an id"
    );
  }
}
