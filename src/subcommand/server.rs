use {
  self::server_error::ServerError,
  super::*,
  axum::{
    extract::{rejection::JsonRejection, Extension, Path, Request},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
  },
  tokio::runtime::Runtime,
};

mod server_error;

#[derive(Debug, Parser, PartialEq)]
pub struct Server {
  #[arg(
    long,
    default_value = "127.0.0.1:8000",
    help = "Listen on <ADDRESS> for incoming requests."
  )]
  address: SocketAddr,
  #[arg(
    long,
    default_value_t = MessageList::DEFAULT_CAPACITY,
    help = "Keep at most <CAPACITY> messages."
  )]
  capacity: usize,
  #[arg(
    long,
    default_value_t = MessageList::DEFAULT_MAX_LENGTH,
    help = "Reject messages longer than <MAX_LENGTH> characters."
  )]
  max_length: usize,
  #[arg(long, help = "Open server in browser.")]
  open: bool,
}

#[derive(Debug)]
struct Resource {
  content_type: Mime,
  content: Vec<u8>,
}

impl Resource {
  fn new(content_type: Mime, content: Vec<u8>) -> Self {
    Self {
      content_type,
      content,
    }
  }
}

impl IntoResponse for Resource {
  fn into_response(self) -> Response {
    (
      [(header::CONTENT_TYPE, self.content_type.to_string())],
      self.content,
    )
      .into_response()
  }
}

type ServerResult<T = Resource> = std::result::Result<T, ServerError>;

#[derive(Debug, Default)]
pub(crate) struct State {
  messages: RwLock<MessageList>,
}

impl State {
  fn new(messages: MessageList) -> Self {
    Self {
      messages: RwLock::new(messages),
    }
  }
}

impl Server {
  pub fn run(self) -> Result {
    let state = Arc::new(State::new(MessageList::new(
      self.capacity,
      self.max_length,
    )));

    if self.open {
      let url = format!("http://{}/", self.address);
      open::that(&url).context(error::Open { url: &url })?;
    }

    if Assets::get(Assets::VIEWER).is_none() {
      log::warn!(
        "browser client missing from static/{}, run `just viewer` and rebuild",
        Assets::VIEWER,
      );
    }

    log::info!("serving message board on http://{}/", self.address);

    Runtime::new().context(error::Runtime)?.block_on(async {
      axum_server::Server::bind(self.address)
        .serve(Self::router(state).into_make_service())
        .await
        .context(error::Serve {
          address: self.address,
        })
    })?;

    Ok(())
  }

  fn router(state: Arc<State>) -> Router {
    Router::new()
      .route("/", get(Self::index))
      .route("/index.html", get(Self::index))
      .route("/static/*path", get(Self::asset))
      .route("/health", get(Self::health))
      .route(GET_MESSAGES, get(Self::get_messages))
      .route(ADD_MESSAGE, post(Self::add_message))
      .fallback(Self::not_found)
      .layer(middleware::from_fn(Self::log))
      .layer(Extension(state))
  }

  async fn log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    log::info!("{method} {path} {}", response.status());

    response
  }

  async fn index(Extension(state): Extension<Arc<State>>) -> Resource {
    let max_length = state
      .messages
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .max_length();

    Resource::new(
      mime::TEXT_HTML_UTF_8,
      IndexHtml { max_length }.to_string().into_bytes(),
    )
  }

  async fn asset(Path(path): Path<String>) -> ServerResult {
    let (content_type, content) = Assets::load(&path).ok_or_else(|| ServerError::NotFound {
      message: format!("/static/{path} not found"),
    })?;

    Ok(Resource::new(content_type, content))
  }

  async fn health() -> &'static str {
    "ok"
  }

  async fn get_messages(Extension(state): Extension<Arc<State>>) -> Json<MessagesResponse> {
    Json(MessagesResponse {
      messages: state
        .messages
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .messages(),
    })
  }

  async fn add_message(
    Extension(state): Extension<Arc<State>>,
    request: std::result::Result<Json<AddMessageRequest>, JsonRejection>,
  ) -> ServerResult<Json<MessagesResponse>> {
    let Json(AddMessageRequest { text }) = request.map_err(|rejection| ServerError::BadRequest {
      message: rejection.body_text(),
    })?;

    let mut messages = state
      .messages
      .write()
      .unwrap_or_else(PoisonError::into_inner);

    messages.add(text).map_err(|err| ServerError::User {
      message: err.to_string(),
    })?;

    Ok(Json(MessagesResponse {
      messages: messages.messages(),
    }))
  }

  async fn not_found() -> ServerError {
    ServerError::NotFound {
      message: "Not found".into(),
    }
  }
}
