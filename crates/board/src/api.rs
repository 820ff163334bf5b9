use super::*;

/// Body of a successful response from both endpoints. Newest message first.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MessagesResponse {
  pub messages: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AddMessageRequest {
  pub text: String,
}

/// Body of a non-200 response whose message should be shown to the user
/// verbatim.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserErrorResponse {
  pub user_error_message: String,
}
