use clap::Args;
use serde::Serialize;

use crate::options::CertificateFieldArgs;

/// Recompute the certificate id and content hash from claimed field values.
/// The issuer must be supplied explicitly: a verifier has no signing key to
/// fall back on, and without the true issuer the derived id will not match.
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct Compute {
    #[command(flatten)]
    pub(crate) fields: CertificateFieldArgs,
}
