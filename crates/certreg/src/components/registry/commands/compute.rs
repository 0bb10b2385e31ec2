use clap::Args;
use serde::Serialize;

use crate::options::{CertificateFieldArgs, ConnectionArgs};

/// Derive the certificate id and content hash without touching the ledger
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct Compute {
    #[command(flatten)]
    pub(crate) fields: CertificateFieldArgs,

    #[command(flatten)]
    #[serde(flatten)]
    pub(crate) connection: ConnectionArgs,
}
