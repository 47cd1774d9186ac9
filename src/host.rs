//! Host session for clipmock
//!
//! Connects a clipboard provider to the editor host:
//! - Frame codec (msgpack-rpc shaped JSON lines)
//! - Line-framed session over any reader/writer pair
//! - Request routing into the provider
//! - stdio and socket transports

mod dispatch;
mod message;
mod session;
mod transport;

pub use dispatch::{HostStats, PluginHost};
pub use message::Message;
pub use session::Session;
pub use transport::{BoxedSession, LISTEN_ADDRESS_ENV, SocketAddress, connect, resolve_address};
