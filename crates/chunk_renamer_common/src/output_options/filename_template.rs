use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\[(name|id|hash|chunkhash|contenthash)(?::(\d+))?\]").unwrap()
});

/// Values available for the placeholders of a [`FilenameTemplate`].
///
/// Hash values are full digests. They get cut down to the requested `[hash:N]` length, or
/// to the default length handed to [`FilenameTemplate::render`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateReplacements<'a> {
  pub name: Option<&'a str>,
  pub id: Option<&'a str>,
  pub hash: Option<&'a str>,
  pub chunk_hash: Option<&'a str>,
  pub content_hash: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: String) -> Self {
    Self { template }
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  pub fn into_string(self) -> String {
    self.template
  }

  /// Placeholders without a value are kept verbatim, so a later stage can still fill them.
  pub fn render(&self, replacements: &TemplateReplacements<'_>, hash_length: usize) -> String {
    PLACEHOLDER_RE
      .replace_all(&self.template, |caps: &Captures<'_>| {
        let is_hash = caps[1].ends_with("hash");
        let value = match &caps[1] {
          "name" => replacements.name.or(replacements.id),
          "id" => replacements.id,
          "hash" => replacements.hash,
          "chunkhash" => replacements.chunk_hash,
          "contenthash" => replacements.content_hash,
          _ => None,
        };
        let Some(value) = value else {
          return caps[0].to_string();
        };
        let len = caps
          .get(2)
          .and_then(|len| len.as_str().parse::<usize>().ok())
          .or(is_hash.then_some(hash_length));
        match len {
          Some(len) => value.chars().take(len).collect::<String>(),
          None => value.to_string(),
        }
      })
      .into_owned()
  }
}

impl From<String> for FilenameTemplate {
  fn from(template: String) -> Self {
    Self::new(template)
  }
}

impl From<&str> for FilenameTemplate {
  fn from(template: &str) -> Self {
    Self::new(template.to_string())
  }
}
