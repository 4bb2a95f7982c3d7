use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("{0}: no next handler found")]
    NoNextHandler(String),

    #[error("All upstream servers are unreachable")]
    TransportAllServersUnreachable,
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}
