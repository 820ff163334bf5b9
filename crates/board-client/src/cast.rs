use super::*;

pub trait Cast {
  fn cast<T: JsCast>(self) -> Option<T>;
}

impl<V: JsCast> Cast for V {
  fn cast<T: JsCast>(self) -> Option<T> {
    match self.dyn_into::<T>() {
      Ok(value) => Some(value),
      Err(value) => {
        log::error!("unexpected node type: {:?}", AsRef::<JsValue>::as_ref(&value));
        None
      }
    }
  }
}
