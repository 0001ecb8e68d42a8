use crate::clients::{AsyncExchanger, TransportError};
use crate::io::ByteCursor;
use crate::{Error, Query, Response, Result};
use async_trait::async_trait;
use log::{debug, warn};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;

/// The well-known name server port.
pub const DEFAULT_PORT: u16 = 53;

pub const GOOGLE_IPV4_PRIMARY: &str = "8.8.8.8";
pub const GOOGLE_IPV4_SECONDARY: &str = "8.8.4.4";

/// A UDP DNS Client.
///
/// Each exchange binds a fresh socket, sends the query as one datagram, and
/// waits for a reply with a matching id. Replies with any other id are
/// dropped. There are no retries.
///
/// # Example
///
/// ```rust,no_run
/// use netdns::clients::udp::{DEFAULT_PORT, GOOGLE_IPV4_PRIMARY};
/// use netdns::clients::{AsyncExchanger, UdpClient};
/// use netdns::{Query, Type};
///
/// #[tokio::main]
/// async fn main() -> Result<(), netdns::Error> {
///     let query = Query::question(&mut rand::thread_rng(), "bramp.net", Type::A);
///
///     let response = UdpClient::new(GOOGLE_IPV4_PRIMARY, DEFAULT_PORT)?
///         .exchange(&query)
///         .await?;
///
///     println!("{}", response);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct UdpClient {
    server: SocketAddr,

    timeout: Duration,
}

impl UdpClient {
    /// Creates a new client sending to `host` on `port`. The host may be a
    /// hostname, in which case the first address it resolves to is used.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        let server = (host, port)
            .to_socket_addrs()
            .map_err(TransportError::from)?
            .next()
            .ok_or_else(|| {
                TransportError::from(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} did not resolve to any address", host),
                ))
            })?;

        Ok(Self::with_server(server))
    }

    /// Creates a new client sending to `server`.
    pub fn with_server(server: SocketAddr) -> Self {
        UdpClient {
            server,
            timeout: Duration::from_secs(5),
        }
    }

    /// How long to wait for a matching reply, in total.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// As [`AsyncExchanger::exchange`], but gives up with
    /// [`TransportError::Cancelled`] as soon as `token` is cancelled. The
    /// socket is closed before this returns, so no reply can arrive later.
    pub async fn exchange_cancellable(
        &self,
        query: &Query,
        token: &CancellationToken,
    ) -> Result<Response> {
        tokio::select! {
            biased;

            _ = token.cancelled() => {
                debug!("exchange with {} cancelled", self.server);
                Err(TransportError::Cancelled.into())
            }
            result = self.exchange(query) => result,
        }
    }

    async fn send_and_receive(&self, query: &Query, req: &[u8]) -> Result<Response> {
        let bind_addr: SocketAddr = if self.server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(TransportError::from)?;

        // Connect us to the server, meaning recv will only receive directly
        // from the server.
        socket
            .connect(self.server)
            .await
            .map_err(TransportError::from)?;

        let sent = socket.send(req).await.map_err(TransportError::from)?;
        debug!("sent {} byte query to {}", sent, self.server);

        let mut buf = [0; Response::MAX_UDP_LEN];
        loop {
            let len = socket.recv(&mut buf).await.map_err(TransportError::from)?;
            let reply = &buf[..len];

            match reply_id(reply) {
                Some(id) if id == query.header.id => {
                    debug!("received {} byte reply from {}", len, self.server);
                    return Response::from_slice(reply);
                }
                id => warn!(
                    "dropping reply from {} with id {:?}, expected {}",
                    self.server, id, query.header.id
                ),
            }
        }
    }
}

fn reply_id(reply: &[u8]) -> Option<u16> {
    ByteCursor::new(reply).read_integer::<u16>().ok()
}

#[async_trait]
impl AsyncExchanger for UdpClient {
    /// Sends the query [`Query`] to the server via UDP and returns the result.
    async fn exchange(&self, query: &Query) -> Result<Response> {
        let req = query.to_vec()?;

        match tokio::time::timeout(self.timeout, self.send_and_receive(query, &req)).await {
            Ok(result) => result,
            Err(_) => Err(Error::from(TransportError::Timeout(self.timeout))),
        }
    }
}
