use clap::Args;
use serde::Serialize;

use crate::options::ConnectionArgs;

/// Check a certificate id against a claimed content hash
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct Verify {
    /// Certificate id, 0x-prefixed 32-byte hex
    #[arg(long)]
    pub(crate) id: String,

    /// Claimed content hash, 0x-prefixed 32-byte hex
    #[arg(long = "content-hash")]
    pub(crate) content_hash: String,

    #[command(flatten)]
    #[serde(flatten)]
    pub(crate) connection: ConnectionArgs,
}
