//! JSON-over-HTTP calls to the page's origin.
//!
//! Every call either returns an [`Outcome`] or an [`RpcError`] naming one of
//! four failure kinds. Calls are never retried.

use super::*;

/// Successful result of a call.
#[derive(Debug, PartialEq)]
pub enum Outcome {
  /// 200 with a JSON object body.
  Object(Map<String, Value>),
  /// 200 with no body and no content type.
  Empty,
}

pub struct Rpc {
  base: Url,
  client: reqwest::Client,
  timeout: Duration,
}

impl Rpc {
  pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

  pub fn new(base: Url) -> Result<Self, Error> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = reqwest::Client::builder()
      .redirect(reqwest::redirect::Policy::none())
      .build()
      .context(error::Client)?;

    #[cfg(target_arch = "wasm32")]
    let client = reqwest::Client::builder()
      .build()
      .context(error::Client)?;

    Ok(Self {
      base,
      client,
      timeout: Self::DEFAULT_TIMEOUT,
    })
  }

  pub fn from_location() -> Result<Self, Error> {
    let window = web_sys::window().context(error::WindowMissing)?;

    let href = window
      .location()
      .href()
      .map_err(|_| error::LocationMissing.build())?;

    let base = Url::parse(&href).context(error::LocationUrl { href })?;

    Self::new(base)
  }

  pub fn timeout(self, timeout: Duration) -> Self {
    Self { timeout, ..self }
  }

  pub(crate) fn url(&self, path: &str) -> Url {
    let mut url = self.base.clone();
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);
    url
  }

  pub async fn call<B: Serialize>(
    &self,
    method: Method,
    path: &str,
    body: Option<&B>,
  ) -> Result<Outcome, RpcError> {
    let url = self.url(path);

    let body = body
      .map(serde_json::to_string)
      .transpose()
      .map_err(|err| RpcError::server(err.to_string()))?;

    log::info!(
      "rpc request {method} {path} {}",
      body.as_deref().unwrap_or("null")
    );

    let mut request = self
      .client
      .request(method, url.clone())
      .timeout(self.timeout)
      .header(header::CACHE_CONTROL, "no-store");

    if let Some(body) = body {
      request = request
        .header(header::CONTENT_TYPE, "application/json")
        .body(body);
    }

    #[cfg(target_arch = "wasm32")]
    {
      request = request.fetch_credentials_omit().fetch_cache_no_store();
    }

    let start = now();

    let expired = || now() - start >= self.timeout.as_secs_f64() * 1000.0;

    let response = request
      .send()
      .await
      .map_err(|source| RpcError::transport(url.clone(), source, expired()))?;

    let status = response.status();

    let content_type = response
      .headers()
      .get(header::CONTENT_TYPE)
      .and_then(|value| value.to_str().ok())
      .unwrap_or_default()
      .to_lowercase();

    let body = response
      .bytes()
      .await
      .map_err(|source| RpcError::transport(url, source, expired()))?;

    log::info!(
      "rpc response {{status: {status}, type: {content_type}, len: {}}}",
      body.len()
    );

    classify(status, &content_type, &body)
  }
}

/// Milliseconds since the epoch. `Instant` panics in the browser.
fn now() -> f64 {
  #[cfg(target_arch = "wasm32")]
  return js_sys::Date::now();

  #[cfg(not(target_arch = "wasm32"))]
  return std::time::SystemTime::now()
    .duration_since(std::time::UNIX_EPOCH)
    .unwrap_or_default()
    .as_secs_f64()
    * 1000.0;
}

/// Sort a complete response into an outcome or an error.
pub fn classify(status: StatusCode, content_type: &str, body: &[u8]) -> Result<Outcome, RpcError> {
  let content_type = content_type.to_lowercase();

  let object = if content_type.starts_with("application/json") {
    match serde_json::from_slice::<Value>(body) {
      Ok(Value::Object(object)) => {
        log::debug!("rpc response body {}", Value::Object(object.clone()));
        Some(object)
      }
      Ok(value) => {
        log::error!("rpc response is not a JSON object: {value}");
        return Err(RpcError::malformed());
      }
      Err(err) => {
        log::error!(
          "rpc response body is not JSON: {err}: {}",
          String::from_utf8_lossy(body)
        );
        return Err(RpcError::malformed());
      }
    }
  } else {
    None
  };

  if status == StatusCode::OK {
    if let Some(object) = object {
      return Ok(Outcome::Object(object));
    }

    if body.is_empty() && content_type.is_empty() {
      return Ok(Outcome::Empty);
    }

    return Err(RpcError::server(format!(
      "server response content-type is not JSON: {content_type}"
    )));
  }

  if let Some(object) = object {
    if let Ok(UserErrorResponse { user_error_message }) =
      serde_json::from_value(Value::Object(object))
    {
      return Err(RpcError::User {
        message: user_error_message,
      });
    }
  }

  if content_type.starts_with("text/") {
    return Err(RpcError::server(format!(
      "{status}, {}",
      String::from_utf8_lossy(body)
    )));
  }

  Err(RpcError::malformed())
}
