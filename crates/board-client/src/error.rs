use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("failed to build HTTP client"))]
  Client { source: reqwest::Error },
  WindowMissing,
  DocumentMissing,
  BodyMissing,
  LocationMissing,
  #[snafu(display("failed to parse page location `{href}`"))]
  LocationUrl {
    href: String,
    source: url::ParseError,
  },
  #[snafu(display("element `#{id}` not found"))]
  ElementMissing { id: String },
  #[snafu(display("template `#{id}` has no element"))]
  TemplateEmpty { id: String },
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}
