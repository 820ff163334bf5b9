use super::*;

#[derive(RustEmbed)]
#[folder = "static"]
pub(crate) struct Assets;

impl Assets {
  /// wasm-bindgen output for the browser client, written by `just viewer`.
  pub(crate) const VIEWER: &'static str = "pkg/board_viewer.js";

  pub(crate) fn load(path: &str) -> Option<(Mime, Vec<u8>)> {
    let file = Self::get(path)?;

    Some((
      mime_guess::from_path(path).first_or_octet_stream(),
      file.data.into_owned(),
    ))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stylesheet() {
    let (content_type, content) = Assets::load("index.css").unwrap();
    assert_eq!(content_type, mime::TEXT_CSS);
    assert!(!content.is_empty());
  }

  #[test]
  fn missing() {
    assert!(Assets::load("missing.js").is_none());
  }
}
