use super::*;

/// The two message board endpoints. `Ok(None)` means the server answered
/// with an empty body and there is nothing to render.
pub trait Board {
  async fn get_messages(&self) -> Result<Option<Vec<String>>, RpcError>;

  async fn add_message(&self, text: &str) -> Result<Option<Vec<String>>, RpcError>;
}

pub struct Api {
  rpc: Rpc,
}

impl Api {
  pub fn new(rpc: Rpc) -> Self {
    Self { rpc }
  }

  pub fn from_location() -> Result<Self, Error> {
    Ok(Self::new(Rpc::from_location()?))
  }

  fn messages(outcome: Outcome) -> Result<Option<Vec<String>>, RpcError> {
    let object = match outcome {
      Outcome::Empty => return Ok(None),
      Outcome::Object(object) => Value::Object(object),
    };

    match MessagesResponse::deserialize(&object) {
      Ok(response) => Ok(Some(response.messages)),
      Err(err) => {
        log::error!("unexpected server response: {object}: {err}");
        Err(RpcError::malformed())
      }
    }
  }
}

impl Board for Api {
  async fn get_messages(&self) -> Result<Option<Vec<String>>, RpcError> {
    Self::messages(
      self
        .rpc
        .call::<()>(Method::GET, GET_MESSAGES, None)
        .await?,
    )
  }

  async fn add_message(&self, text: &str) -> Result<Option<Vec<String>>, RpcError> {
    Self::messages(
      self
        .rpc
        .call(
          Method::POST,
          ADD_MESSAGE,
          Some(&AddMessageRequest { text: text.into() }),
        )
        .await?,
    )
  }
}
