//! CEX.IO REST API client.
//!
//! Every call goes through one dispatcher, [`CexioClient::call`]. It looks the
//! command up in a [`CommandSet`] to decide whether the request is public or
//! private, signs private requests, posts the form body and decodes the JSON
//! reply without interpreting it.
//!
//! The typed endpoint methods (`ticker`, `buy_limit_order`, ...) are thin
//! wrappers that build an [`ApiRequest`] and hand it to the dispatcher.

mod client;
pub mod commands;
mod private;
mod public;
mod request;

pub use client::{CexioClient, CexioClientBuilder};
pub use commands::CommandSet;
pub use request::{AUTH_FIELDS, ApiRequest, ParamValue, Params};
