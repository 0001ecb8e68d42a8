//! Sends [`Query`] messages to a name server and waits for the [`Response`].
//!
//! Only the UDP transport from [rfc1035#section-4.2.1] is provided.
//!
//! [rfc1035#section-4.2.1]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1

use crate::{Query, Response, Result};
use async_trait::async_trait;
use std::io;
use std::time::Duration;
use thiserror::Error;

pub use self::udp::UdpClient;

pub mod udp;

/// AsyncExchanger takes a query and returns a response.
#[async_trait]
pub trait AsyncExchanger {
    async fn exchange(&self, query: &Query) -> Result<Response>;
}

/// Failures that happen on the network, rather than in the message itself.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("no reply within {0:?}")]
    Timeout(Duration),

    #[error("exchange cancelled")]
    Cancelled,
}
