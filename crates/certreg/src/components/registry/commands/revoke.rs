use clap::Args;
use serde::Serialize;

use crate::options::ConnectionArgs;

/// Flag an issued certificate as revoked
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct Revoke {
    /// Certificate id, 0x-prefixed 32-byte hex
    #[arg(long)]
    pub(crate) id: String,

    #[command(flatten)]
    #[serde(flatten)]
    pub(crate) connection: ConnectionArgs,
}

/// Clear the revoked flag of a certificate
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct Unrevoke {
    /// Certificate id, 0x-prefixed 32-byte hex
    #[arg(long)]
    pub(crate) id: String,

    #[command(flatten)]
    #[serde(flatten)]
    pub(crate) connection: ConnectionArgs,
}
