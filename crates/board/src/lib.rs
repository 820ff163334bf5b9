use serde::{Deserialize, Serialize};

pub use self::api::{AddMessageRequest, MessagesResponse, UserErrorResponse};

pub mod api;

pub const GET_MESSAGES: &str = "/get-messages";

pub const ADD_MESSAGE: &str = "/add-message";
