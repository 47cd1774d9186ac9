use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpStream;
use std::path::PathBuf;

use super::session::Session;
use crate::config::Transport;
use crate::error::ClipmockError;

/// Environment variable a host exports with its listen address.
pub const LISTEN_ADDRESS_ENV: &str = "NVIM_LISTEN_ADDRESS";

pub type BoxedSession = Session<Box<dyn BufRead>, Box<dyn Write>>;

/// Where a socket transport connects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketAddress {
    Tcp(String),
    Unix(PathBuf),
}

impl SocketAddress {
    /// `host:port` with a numeric port is TCP, anything else is a socket path.
    pub fn parse(address: &str) -> Self {
        let is_tcp = !address.contains('/')
            && address
                .rsplit_once(':')
                .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());

        if is_tcp {
            SocketAddress::Tcp(address.to_string())
        } else {
            SocketAddress::Unix(PathBuf::from(address))
        }
    }
}

/// Picks the socket address: a non-blank explicit one wins over the environment.
pub fn resolve_address(
    explicit: Option<String>,
    from_env: Option<String>,
) -> Result<SocketAddress, ClipmockError> {
    let non_blank = |a: &String| !a.trim().is_empty();
    explicit
        .filter(non_blank)
        .or(from_env.filter(non_blank))
        .map(|a| SocketAddress::parse(a.trim()))
        .ok_or(ClipmockError::MissingAddress)
}

/// Opens the session selected by `transport`.
pub fn connect(
    transport: Transport,
    address: Option<String>,
) -> Result<BoxedSession, ClipmockError> {
    match transport {
        Transport::Stdio => {
            log::info!("Connecting over stdio");
            Ok(Session::new(Box::new(io::stdin().lock()), Box::new(io::stdout())))
        }
        Transport::Socket => {
            let env_address = std::env::var(LISTEN_ADDRESS_ENV).ok();
            let address = resolve_address(address, env_address)?;
            log::info!("Connecting to {:?}", address);
            connect_socket(&address)
        }
    }
}

fn connect_socket(address: &SocketAddress) -> Result<BoxedSession, ClipmockError> {
    match address {
        SocketAddress::Tcp(addr) => {
            let stream = TcpStream::connect(addr)?;
            let writer = stream.try_clone()?;
            Ok(Session::new(Box::new(BufReader::new(stream)), Box::new(writer)))
        }
        SocketAddress::Unix(path) => connect_unix(path),
    }
}

#[cfg(unix)]
fn connect_unix(path: &std::path::Path) -> Result<BoxedSession, ClipmockError> {
    use std::os::unix::net::UnixStream;

    let stream = UnixStream::connect(path)?;
    let writer = stream.try_clone()?;
    Ok(Session::new(Box::new(BufReader::new(stream)), Box::new(writer)))
}

#[cfg(not(unix))]
fn connect_unix(path: &std::path::Path) -> Result<BoxedSession, ClipmockError> {
    Err(ClipmockError::UnsupportedTransport(format!(
        "unix socket {} on this platform",
        path.display()
    )))
}
