#![allow(async_fn_in_trait)]

use {
  self::reconcile::reconcile,
  board::{AddMessageRequest, MessagesResponse, UserErrorResponse, ADD_MESSAGE, GET_MESSAGES},
  html_escaper::Escape,
  js_sys::Promise,
  reqwest::{header, Method, StatusCode},
  serde::{Deserialize, Serialize},
  serde_json::{Map, Value},
  snafu::{OptionExt, ResultExt, Snafu},
  std::{
    cell::Cell,
    fmt::{self, Display, Formatter},
    ops::Deref,
    rc::Rc,
    time::Duration,
  },
  url::Url,
  wasm_bindgen::{
    closure::Closure,
    convert::{FromWasmAbi, IntoWasmAbi},
    JsCast, JsError, JsValue,
  },
  web_sys::{
    Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTemplateElement, Window,
  },
};

pub use {
  self::{
    api::{Api, Board},
    cast::Cast,
    controller::{Controller, Page, RequestState},
    dom::DomPage,
    error::Error,
    event_target_ext::EventTargetExt,
    reconcile::ListView,
    rpc::{Outcome, Rpc},
    rpc_error::RpcError,
    select::Select,
  },
  log, reqwest, wasm_bindgen, wasm_bindgen_futures, web_sys,
};


#[cfg(test)]
use test::*;

mod api;
mod cast;
mod controller;
mod dom;
mod error;
mod event_target_ext;
pub mod reconcile;
pub mod rpc;
mod rpc_error;
mod select;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}
