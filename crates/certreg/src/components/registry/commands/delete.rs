use clap::Args;
use serde::Serialize;

use crate::options::ConnectionArgs;

/// Remove a certificate record from the ledger
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct Delete {
    /// Certificate id, 0x-prefixed 32-byte hex
    #[arg(long)]
    pub(crate) id: String,

    #[command(flatten)]
    #[serde(flatten)]
    pub(crate) connection: ConnectionArgs,
}
