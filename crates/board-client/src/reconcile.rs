//! Positional update of rendered list items.

use super::*;

/// A list of rendered items whose content is HTML.
pub trait ListView {
  type Item;

  /// Rendered items, in display order.
  fn items(&self) -> Vec<Self::Item>;

  fn set_content(&self, item: &Self::Item, html: &str);

  fn remove(&self, item: Self::Item);

  /// Append a new item, cloned from the list's template, with `html` as its
  /// content.
  fn append(&self, html: &str);
}

/// Make `list` show `messages`, reusing existing items in order, removing
/// the excess, and appending what is missing. Messages are escaped.
pub fn reconcile(list: &impl ListView, messages: &[String]) {
  let mut messages = messages.iter();

  for item in list.items() {
    match messages.next() {
      Some(message) => list.set_content(&item, &escape(message)),
      None => list.remove(item),
    }
  }

  for message in messages {
    list.append(&escape(message));
  }
}

struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    self.0.escape(f, false)
  }
}

fn escape(message: &str) -> String {
  Escaped(message).to_string()
}
