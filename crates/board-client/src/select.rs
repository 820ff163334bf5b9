use super::*;

pub trait Select {
  fn select<T: JsCast>(&self, selector: &str) -> Option<T>;

  fn select_all<T: JsCast>(&self, selector: &str) -> Vec<T>;
}

impl<D: Deref<Target = Element>> Select for D {
  fn select<T: JsCast>(&self, selector: &str) -> Option<T> {
    self
      .query_selector(selector)
      .expect("invalid selector")
      .and_then(|element| element.cast::<T>())
  }

  fn select_all<T: JsCast>(&self, selector: &str) -> Vec<T> {
    let list = self.query_selector_all(selector).expect("invalid selector");
    (0..list.length())
      .filter_map(|i| list.item(i))
      .filter_map(|node| node.cast::<T>())
      .collect()
  }
}
