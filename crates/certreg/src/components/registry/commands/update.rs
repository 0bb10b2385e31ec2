use clap::Args;
use serde::Serialize;

use crate::options::{CertificateFieldArgs, ConnectionArgs};

/// Replace the fields and content hash of an issued certificate
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct Update {
    #[command(flatten)]
    pub(crate) fields: CertificateFieldArgs,

    /// Certificate id to update; derived from the fields when omitted
    #[arg(long)]
    pub(crate) id: Option<String>,

    /// Reuse a precomputed content hash instead of deriving it
    #[arg(long = "content-hash")]
    pub(crate) content_hash: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub(crate) connection: ConnectionArgs,
}
