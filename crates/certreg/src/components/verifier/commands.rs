use clap::{Args, Subcommand};

mod compute;
mod fetch;
mod verify;

pub(crate) use compute::Compute;
pub(crate) use fetch::Fetch;
pub(crate) use verify::Verify;

/// Certreg CLI subcommand for third-party certificate verification
#[derive(Args, Debug)]
pub(crate) struct VerifierCommand {
    #[clap(subcommand)]
    pub(crate) subcommands: Option<VerifierCommands>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum VerifierCommands {
    Compute(Compute),
    Verify(Verify),
    Fetch(Fetch),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify() {
        assert!(VerifierCommands::has_subcommand("verify"));
    }
}
