use super::*;

/// The page the controller drives: a text box, a message list, and a way
/// to tell the user something went wrong.
pub trait Page: ListView {
  fn message_text(&self) -> String;

  fn clear_message_text(&self);

  fn focus_list(&self);

  fn alert(&self, message: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RequestState {
  #[default]
  Idle,
  InFlight,
}

pub struct Controller<B, P> {
  board: B,
  page: P,
  state: Cell<RequestState>,
}

// Returns the controller to idle however the request ends.
struct InFlight<'a>(&'a Cell<RequestState>);

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    self.0.set(RequestState::Idle);
  }
}

impl<B: Board, P: Page> Controller<B, P> {
  pub fn new(board: B, page: P) -> Self {
    Self {
      board,
      page,
      state: Cell::default(),
    }
  }

  pub fn page(&self) -> &P {
    &self.page
  }

  pub fn state(&self) -> RequestState {
    self.state.get()
  }

  fn begin(&self) -> Option<InFlight<'_>> {
    if self.state.get() == RequestState::InFlight {
      log::debug!("request in flight, ignoring trigger");
      return None;
    }

    self.state.set(RequestState::InFlight);

    Some(InFlight(&self.state))
  }

  /// Fetch and render the current message list.
  pub async fn load(&self) {
    let Some(_in_flight) = self.begin() else {
      return;
    };

    match self.board.get_messages().await {
      Ok(messages) => self.render(messages),
      Err(err) => self.fail(err),
    }
  }

  /// Send the text box contents as a new message.
  pub async fn submit(&self) {
    let Some(_in_flight) = self.begin() else {
      return;
    };

    let text = self.page.message_text();

    let text = text.trim();

    if text.is_empty() {
      return;
    }

    match self.board.add_message(text).await {
      Ok(messages) => {
        self.render(messages);
        self.page.clear_message_text();
        self.page.focus_list();
      }
      Err(err) => self.fail(err),
    }
  }

  fn render(&self, messages: Option<Vec<String>>) {
    if let Some(messages) = messages {
      reconcile(&self.page, &messages);
    }
  }

  fn fail(&self, err: RpcError) {
    log::error!("{err:?}");
    self.page.alert(&err.to_string());
  }
}

#[cfg(test)]
mod tests {
  use {super::*, tokio::sync::oneshot};

  fn controller(
    responses: impl IntoIterator<Item = Result<Option<Vec<String>>, RpcError>>,
    items: &[&str],
  ) -> Controller<MemoryBoard, MemoryPage> {
    Controller::new(
      MemoryBoard::new(responses),
      MemoryPage::with_items(items),
    )
  }

  fn messages(messages: &[&str]) -> Option<Vec<String>> {
    Some(messages.iter().map(|message| message.to_string()).collect())
  }

  #[tokio::test]
  async fn load_renders_messages() {
    let controller = controller([Ok(messages(&["b", "a"]))], &[]);

    controller.load().await;

    assert_eq!(controller.board.requests(), [Request::GetMessages]);
    assert_eq!(controller.page.contents(), ["b", "a"]);
    assert_eq!(controller.state(), RequestState::Idle);
  }

  #[tokio::test]
  async fn submit_sends_trimmed_text() {
    let controller = controller([Ok(messages(&["hello", "a"]))], &["a"]);

    controller.page.set_message_text("  hello\n");

    controller.submit().await;

    assert_eq!(
      controller.board.requests(),
      [Request::AddMessage("hello".into())]
    );
    assert_eq!(controller.page.contents(), ["hello", "a"]);
    assert_eq!(controller.page.message_text(), "");
    assert!(controller.page.list_focused());
    assert!(controller.page.alerts().is_empty());
  }

  #[tokio::test]
  async fn blank_submit_sends_nothing() {
    for text in ["", " ", "\t\n "] {
      let controller = controller([], &["a"]);

      controller.page.set_message_text(text);

      controller.submit().await;

      assert!(controller.board.requests().is_empty());
      assert_eq!(controller.page.contents(), ["a"]);
      assert_eq!(controller.page.message_text(), text);
      assert_eq!(controller.state(), RequestState::Idle);
    }
  }

  #[tokio::test]
  async fn user_error_alerts_and_keeps_state() {
    let controller = controller(
      [Err(RpcError::User {
        message: "bad input".into(),
      })],
      &["a", "b"],
    );

    controller.page.set_message_text("spam");

    controller.submit().await;

    assert_eq!(controller.page.alerts(), ["bad input"]);
    assert_eq!(controller.page.contents(), ["a", "b"]);
    assert_eq!(controller.page.message_text(), "spam");
    assert_eq!(controller.state(), RequestState::Idle);
  }

  #[tokio::test]
  async fn load_error_alerts_with_category() {
    let controller = controller(
      [Err(RpcError::Timeout {
        url: "http://localhost/get-messages".parse().unwrap(),
      })],
      &["a"],
    );

    controller.load().await;

    assert_eq!(
      controller.page.alerts(),
      ["Error talking to server.  Please try again."]
    );
    assert_eq!(controller.page.contents(), ["a"]);
  }

  #[tokio::test]
  async fn empty_response_leaves_list() {
    let controller = controller([Ok(None)], &["a"]);

    controller.page.set_message_text("b");

    controller.submit().await;

    assert_eq!(controller.page.contents(), ["a"]);
    assert_eq!(controller.page.message_text(), "");
    assert!(controller.page.alerts().is_empty());
  }

  #[tokio::test]
  async fn trigger_while_in_flight_is_dropped() {
    let (tx, rx) = oneshot::channel();

    let controller = controller([Ok(messages(&["first"]))], &[]);

    controller.board.hold(rx);

    controller.page.set_message_text("first");

    let first = controller.submit();
    tokio::pin!(first);

    tokio::select! {
      biased;
      () = &mut first => panic!("request completed before release"),
      () = std::future::ready(()) => {}
    }

    assert_eq!(controller.state(), RequestState::InFlight);

    controller.page.set_message_text("second");

    controller.submit().await;
    controller.load().await;

    assert_eq!(
      controller.board.requests(),
      [Request::AddMessage("first".into())]
    );
    assert!(controller.page.contents().is_empty());
    assert_eq!(controller.page.message_text(), "second");

    tx.send(()).unwrap();

    first.await;

    assert_eq!(controller.state(), RequestState::Idle);
    assert_eq!(controller.page.contents(), ["first"]);
  }
}
