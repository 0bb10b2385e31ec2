use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;

use certreg_crypto::types::{parse_account_address, Address, CertificateFields};
use certreg_ledger_client::Error;

use crate::components::registry::commands::RegistryCommand;
use crate::components::verifier::commands::VerifierCommand;

#[derive(Parser, Debug)]
#[clap(name = "certreg", about = "Academic certificate registry CLI", version)]
pub(crate) struct Opt {
    /// Defines the verbosity level
    #[arg(
        long,
        short = 'v',
        action = clap::ArgAction::Count,
        global = true
    )]
    pub(crate) verbose: u8,

    /// Home directory for the configuration
    #[arg(
        long,
        env = "CERTREG_HOME",
        default_value = get_default_home(),
        global = true
    )]
    pub(crate) home: PathBuf,

    #[command(subcommand)]
    pub(crate) commands: CertregCommand,
}

/// If no path is given for the --home argument, we use the default one
/// ~/.config/certreg for a UNIX subsystem
fn get_default_home() -> OsString {
    let mut home = dirs::home_dir().unwrap();
    home.push(".config");
    home.push("certreg");
    home.into_os_string()
}

#[derive(Subcommand, Debug)]
pub(crate) enum CertregCommand {
    Registry(RegistryCommand),
    Verifier(VerifierCommand),
}

/// Connection overrides, merged over `$CERTREG_HOME/config.toml`.
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct ConnectionArgs {
    /// JSON-RPC endpoint of the ledger node
    #[clap(long, env = "CERTREG_ENDPOINT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) endpoint: Option<String>,

    /// Address of the deployed certificate registry contract
    #[clap(long = "contract-address", env = "CERTREG_CONTRACT_ADDRESS")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) contract_address: Option<String>,

    /// Hex-encoded private key used to sign mutating transactions
    #[clap(long = "private-key", env = "CERTREG_PRIVATE_KEY", hide_env_values = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) private_key: Option<String>,
}

/// The raw certificate field tuple as typed on the command line.
#[derive(Args, Clone, Debug, Serialize)]
pub(crate) struct CertificateFieldArgs {
    /// Full name of the certificate holder
    #[arg(long = "holder-name")]
    pub(crate) holder_name: String,

    /// Roll number of the holder
    #[arg(long = "roll-number")]
    pub(crate) roll_number: String,

    /// Course the certificate was issued for
    #[arg(long)]
    pub(crate) course: String,

    /// Year of issue
    #[arg(long)]
    pub(crate) year: u32,

    /// Issuer account address; defaults to the connected signer
    #[arg(long)]
    pub(crate) issuer: Option<String>,
}

impl CertificateFieldArgs {
    /// Turn the raw arguments into a validated field tuple. The issuer
    /// falls back to `default_issuer` (the connected signer) when not
    /// given explicitly.
    pub(crate) fn resolve(
        &self,
        default_issuer: Option<Address>,
    ) -> Result<CertificateFields, Error> {
        let issuer = match (self.issuer.as_deref(), default_issuer) {
            (Some(issuer), _) => parse_account_address(issuer)?,
            (None, Some(address)) => address,
            (None, None) => {
                return Err(Error::MalformedInput {
                    message: "an issuer address is required when no signing key is configured"
                        .to_string(),
                })
            }
        };

        Ok(CertificateFields {
            holder_name: self.holder_name.clone(),
            roll_number: self.roll_number.clone(),
            course: self.course.clone(),
            year: self.year,
            issuer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_create_invocation() {
        let opt = Opt::try_parse_from([
            "certreg",
            "registry",
            "create",
            "--holder-name",
            "Alice",
            "--roll-number",
            "R1",
            "--course",
            "CS",
            "--year",
            "2024",
            "--contract-address",
            "0xd0d409f68de81b314612474bf10e0cf98252e91a",
        ])
        .unwrap();

        assert!(matches!(opt.commands, CertregCommand::Registry(_)));
    }

    #[test]
    fn year_must_be_numeric() {
        let result = Opt::try_parse_from([
            "certreg",
            "verifier",
            "compute",
            "--holder-name",
            "Alice",
            "--roll-number",
            "R1",
            "--course",
            "CS",
            "--year",
            "twenty",
            "--issuer",
            "0xd0d409f68de81b314612474bf10e0cf98252e91a",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn explicit_issuer_wins_over_the_default() {
        let args = CertificateFieldArgs {
            holder_name: "Alice".into(),
            roll_number: "R1".into(),
            course: "CS".into(),
            year: 2024,
            issuer: Some("0xd0d409f68de81b314612474bf10e0cf98252e91a".into()),
        };
        let fallback = parse_account_address("0x0000000000000000000000000000000000000001").unwrap();

        let fields = args.resolve(Some(fallback)).unwrap();
        assert_ne!(fields.issuer, fallback);
    }

    #[test]
    fn missing_issuer_without_signer_is_an_error() {
        let args = CertificateFieldArgs {
            holder_name: "Alice".into(),
            roll_number: "R1".into(),
            course: "CS".into(),
            year: 2024,
            issuer: None,
        };

        assert!(matches!(
            args.resolve(None),
            Err(Error::MalformedInput { .. })
        ));
    }
}
