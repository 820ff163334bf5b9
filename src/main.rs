#![allow(clippy::result_large_err)]

use {
  self::{
    assets::Assets, error::Error, message_list::MessageList, subcommand::Subcommand,
    templates::IndexHtml,
  },
  board::{AddMessageRequest, MessagesResponse, UserErrorResponse, ADD_MESSAGE, GET_MESSAGES},
  boilerplate::Boilerplate,
  clap::Parser,
  libc::EXIT_FAILURE,
  mime_guess::{mime, Mime},
  rust_embed::RustEmbed,
  snafu::{ensure, ErrorCompat, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    collections::VecDeque,
    io,
    net::SocketAddr,
    process,
    sync::{Arc, PoisonError, RwLock},
  },
};


#[cfg(test)]
use test::*;

mod assets;
mod error;
mod message_list;
mod subcommand;
mod templates;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(err) = Subcommand::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}
