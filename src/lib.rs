//! An encoder and decoder for DNS messages in the wire format defined by
//! [rfc1035](https://datatracker.ietf.org/doc/html/rfc1035).
//!
//! Outbound [`Query`] messages are encoded with [`Query::to_vec`], and inbound
//! [`Response`] messages decoded with [`Response::from_slice`]. Decoding never
//! panics on malformed input, and instead returns a [`Error`].

mod display;
mod errors;
mod header;
mod message;
mod question;
mod record;

pub mod io;
pub mod name;
pub mod types;

#[cfg(feature = "clients")]
#[cfg_attr(docsrs, doc(cfg(feature = "clients")))]
pub mod clients;

pub use crate::errors::{Error, Result};
pub use crate::header::{Flags, Header};
pub use crate::types::*;

// Pull up the various types that should be on the front page of the docs.
#[doc(inline)]
pub use crate::message::Query;
#[doc(inline)]
pub use crate::message::Response;
#[doc(inline)]
pub use crate::question::Question;
#[doc(inline)]
pub use crate::record::Record;
