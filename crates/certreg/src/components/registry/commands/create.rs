use clap::Args;
use serde::Serialize;

use crate::options::{CertificateFieldArgs, ConnectionArgs};

/// Issue a new certificate on the ledger
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct Create {
    #[command(flatten)]
    pub(crate) fields: CertificateFieldArgs,

    /// Reuse a precomputed certificate id instead of deriving it
    #[arg(long)]
    pub(crate) id: Option<String>,

    /// Reuse a precomputed content hash instead of deriving it
    #[arg(long = "content-hash")]
    pub(crate) content_hash: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub(crate) connection: ConnectionArgs,
}
