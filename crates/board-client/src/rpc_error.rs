use super::*;

/// Failure of a single RPC. The `Display` text is what the user sees.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum RpcError {
  #[snafu(display("Error talking to server.  Please try again."))]
  Timeout { url: Url },
  #[snafu(display("Error connecting to server.  Please check your connection."))]
  Network { url: Url, source: reqwest::Error },
  #[snafu(display("{message}"))]
  User { message: String },
  #[snafu(display(
    "Error talking to server{}",
    message.as_ref().map(|message| format!(": {message}")).unwrap_or_default()
  ))]
  Server { message: Option<String> },
}

impl RpcError {
  /// `expired` is set when the call's time budget ran out, which in the
  /// browser surfaces as an aborted fetch rather than a timeout error.
  pub(crate) fn transport(url: Url, source: reqwest::Error, expired: bool) -> Self {
    if expired || source.is_timeout() {
      Self::Timeout { url }
    } else {
      Self::Network { url, source }
    }
  }

  pub(crate) fn server(message: impl Into<String>) -> Self {
    Self::Server {
      message: Some(message.into()),
    }
  }

  pub(crate) fn malformed() -> Self {
    Self::Server { message: None }
  }
}
