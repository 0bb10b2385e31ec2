use clap::Args;
use serde::Serialize;

use crate::options::ConnectionArgs;

/// Fetch the stored record for a certificate id
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct Fetch {
    /// Certificate id, 0x-prefixed 32-byte hex
    #[arg(long)]
    pub(crate) id: String,

    #[command(flatten)]
    #[serde(flatten)]
    pub(crate) connection: ConnectionArgs,
}
