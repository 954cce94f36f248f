use std::time::Duration;

use netsweep_protocols::dns::DnsError;
use thiserror::Error;

/// Why a single probe came back negative.
///
/// Never leaves the prober: the trait methods collapse it to `false`.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("no answer within {0:?}")]
    Timeout(Duration),
    #[error("connection refused")]
    Refused,
    #[error("ping could not be started: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("ping exited without a reply (code {0:?})")]
    NoReply(Option<i32>),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a reverse lookup produced no name.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no PTR answer within {0:?}")]
    Timeout(Duration),
    #[error(transparent)]
    Codec(#[from] DnsError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
