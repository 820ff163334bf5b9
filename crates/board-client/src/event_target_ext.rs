use super::*;

pub trait EventTargetExt {
  /// Register `callback` for `event_type` for the lifetime of the page.
  fn listen<E, F, R>(&self, event_type: &str, callback: F)
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) -> R + 'static,
    R: IntoWasmAbi + 'static;
}

impl<T: Deref<Target = EventTarget>> EventTargetExt for T {
  fn listen<E, F, R>(&self, event_type: &str, callback: F)
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) -> R + 'static,
    R: IntoWasmAbi + 'static,
  {
    let closure = Closure::<dyn FnMut(E) -> R>::new(callback);

    if let Err(err) =
      self.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
    {
      log::error!("failed to listen for `{event_type}`: {err:?}");
      return;
    }

    closure.forget();
  }
}
