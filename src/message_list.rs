use super::*;

/// Bounded list of messages, newest first.
#[derive(Debug)]
pub(crate) struct MessageList {
  capacity: usize,
  max_length: usize,
  messages: VecDeque<String>,
}

#[derive(Debug, PartialEq, Snafu)]
#[snafu(context(suffix(Error)))]
pub(crate) enum Error {
  #[snafu(display("Message is empty."))]
  Empty,
  #[snafu(display("Message too long.  Max {max_length} characters."))]
  TooLong { max_length: usize },
}

impl Default for MessageList {
  fn default() -> Self {
    Self::new(Self::DEFAULT_CAPACITY, Self::DEFAULT_MAX_LENGTH)
  }
}

impl MessageList {
  pub(crate) const DEFAULT_CAPACITY: usize = 100;
  pub(crate) const DEFAULT_MAX_LENGTH: usize = 200;

  pub(crate) fn new(capacity: usize, max_length: usize) -> Self {
    Self {
      capacity,
      max_length,
      messages: VecDeque::new(),
    }
  }

  /// Insert `text` at the front, evicting the oldest messages past capacity.
  pub(crate) fn add(&mut self, text: String) -> Result<(), Error> {
    ensure!(!text.is_empty(), EmptyError);

    // length is in chars, not bytes
    ensure!(
      text.chars().count() <= self.max_length,
      TooLongError {
        max_length: self.max_length
      }
    );

    self.messages.push_front(text);
    self.messages.truncate(self.capacity);

    Ok(())
  }

  pub(crate) fn max_length(&self) -> usize {
    self.max_length
  }

  pub(crate) fn messages(&self) -> Vec<String> {
    self.messages.iter().cloned().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add() {
    let mut list = MessageList::default();

    list.add("message1".into()).unwrap();
    assert_eq!(list.messages(), ["message1"]);

    list.add("message2".into()).unwrap();
    assert_eq!(list.messages(), ["message2", "message1"]);
  }

  #[test]
  fn evicts_oldest() {
    let mut list = MessageList::default();

    for n in 0..MessageList::DEFAULT_CAPACITY {
      list.add(format!("m{n}")).unwrap();
    }

    let messages = list.messages();
    assert_eq!(messages.len(), MessageList::DEFAULT_CAPACITY);
    assert_eq!(messages.last().unwrap(), "m0");

    list.add("messageX".into()).unwrap();

    let messages = list.messages();
    assert_eq!(messages.len(), MessageList::DEFAULT_CAPACITY);
    assert_eq!(messages.first().unwrap(), "messageX");
    assert_eq!(messages.last().unwrap(), "m1");
  }

  #[test]
  fn small_capacity() {
    let mut list = MessageList::new(2, 10);

    for message in ["a", "b", "c"] {
      list.add(message.into()).unwrap();
    }

    assert_eq!(list.messages(), ["c", "b"]);
  }

  #[test]
  fn check_length() {
    let mut list = MessageList::default();

    let max = "a".repeat(MessageList::DEFAULT_MAX_LENGTH);

    assert_eq!(list.add(String::new()), Err(Error::Empty));

    assert_eq!(
      list.add("a".repeat(MessageList::DEFAULT_MAX_LENGTH + 1)),
      Err(Error::TooLong { max_length: 200 }),
    );

    list.add("a".into()).unwrap();
    list.add(max.clone()).unwrap();

    assert_eq!(list.messages(), messages(&[max.as_str(), "a"]));
  }

  #[test]
  fn length_counts_chars() {
    let mut list = MessageList::new(10, 3);

    list.add("ééé".into()).unwrap();

    assert_eq!(
      list.add("éééé".into()),
      Err(Error::TooLong { max_length: 3 })
    );
  }

  #[test]
  fn user_facing_text() {
    assert_eq!(Error::Empty.to_string(), "Message is empty.");
    assert_eq!(
      Error::TooLong { max_length: 200 }.to_string(),
      "Message too long.  Max 200 characters.",
    );
  }
}
