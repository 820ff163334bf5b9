use super::*;

#[derive(Boilerplate)]
pub(crate) struct IndexHtml {
  pub(crate) max_length: usize,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn index() {
    let html = IndexHtml { max_length: 42 }.to_string();

    for id in ["message-form", "message-box", "message-list", "message-template"] {
      assert!(html.contains(&format!("id={id}")), "missing #{id}");
    }

    assert!(html.contains("maxlength=42"));

    assert!(
      html.contains("import init from '/static/pkg/board_viewer.js';"),
      "{html}",
    );
  }
}
