use super::*;

/// The message board page as rendered by the server's index template.
pub struct DomPage {
  form: HtmlFormElement,
  list: HtmlElement,
  message_box: HtmlInputElement,
  prototype: Element,
  window: Window,
}

impl DomPage {
  pub const FORM: &'static str = "message-form";
  pub const LIST: &'static str = "message-list";
  pub const MESSAGE_BOX: &'static str = "message-box";
  pub const TEMPLATE: &'static str = "message-template";

  pub fn new() -> Result<Self, Error> {
    let window = web_sys::window().context(error::WindowMissing)?;
    let document = window.document().context(error::DocumentMissing)?;
    let body = document.body().context(error::BodyMissing)?;

    let template = Self::element::<HtmlTemplateElement>(&body, Self::TEMPLATE)?;

    let prototype = template
      .content()
      .first_element_child()
      .context(error::TemplateEmpty { id: Self::TEMPLATE })?;

    Ok(Self {
      form: Self::element(&body, Self::FORM)?,
      list: Self::element(&body, Self::LIST)?,
      message_box: Self::element(&body, Self::MESSAGE_BOX)?,
      prototype,
      window,
    })
  }

  fn element<T: JsCast>(body: &HtmlElement, id: &str) -> Result<T, Error> {
    body
      .select(&format!("#{id}"))
      .context(error::ElementMissing { id })
  }
}

impl ListView for DomPage {
  type Item = Element;

  fn items(&self) -> Vec<Element> {
    self.list.select_all(":scope > li")
  }

  fn set_content(&self, item: &Element, html: &str) {
    item.set_inner_html(html);
  }

  fn remove(&self, item: Element) {
    item.remove();
  }

  fn append(&self, html: &str) {
    let Some(item) = self
      .prototype
      .clone_node_with_deep(true)
      .ok()
      .and_then(|node| node.cast::<Element>())
    else {
      log::error!("failed to clone `#{}`", Self::TEMPLATE);
      return;
    };

    item.set_inner_html(html);

    if let Err(err) = self.list.append_child(&item) {
      log::error!("failed to append message: {err:?}");
    }
  }
}

impl Page for DomPage {
  fn message_text(&self) -> String {
    self.message_box.value()
  }

  fn clear_message_text(&self) {
    self.message_box.set_value("");
  }

  fn focus_list(&self) {
    if let Err(err) = self.list.focus() {
      log::warn!("failed to focus `#{}`: {err:?}", Self::LIST);
    }
  }

  fn alert(&self, message: &str) {
    if let Err(err) = self.window.alert_with_message(message) {
      log::error!("failed to show alert `{message}`: {err:?}");
    }
  }
}

impl<B: Board + 'static> Controller<B, DomPage> {
  /// Route form submissions through the controller.
  pub fn attach(self: &Rc<Self>) {
    let controller = self.clone();

    self.page().form.listen("submit", move |event: Event| -> Promise {
      event.prevent_default();

      let controller = controller.clone();

      wasm_bindgen_futures::future_to_promise(async move {
        controller.submit().await;
        Ok(JsValue::UNDEFINED)
      })
    });
  }
}
