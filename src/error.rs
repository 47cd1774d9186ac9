use thiserror::Error;

use crate::clipboard::Register;

#[derive(Debug, Error)]
pub enum ClipmockError {
    #[error("Unknown register: {0}")]
    UnknownRegister(Register),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error(
        "No socket address given.\n\nPass --address or set NVIM_LISTEN_ADDRESS to the host's listen address."
    )]
    MissingAddress,

    #[error("Unsupported transport: {0}")]
    UnsupportedTransport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
