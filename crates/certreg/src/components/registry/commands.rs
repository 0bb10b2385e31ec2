use clap::{Args, Subcommand};

mod compute;
mod create;
mod delete;
mod revoke;
mod update;

pub(crate) use compute::Compute;
pub(crate) use create::Create;
pub(crate) use delete::Delete;
pub(crate) use revoke::{Revoke, Unrevoke};
pub(crate) use update::Update;

/// Certreg CLI subcommand for the administrative registry operations
#[derive(Args, Debug)]
pub(crate) struct RegistryCommand {
    #[clap(subcommand)]
    pub(crate) subcommands: Option<RegistryCommands>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum RegistryCommands {
    Compute(Compute),
    Create(Create),
    Update(Update),
    Revoke(Revoke),
    Unrevoke(Unrevoke),
    Delete(Delete),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        assert!(RegistryCommands::has_subcommand("create"));
    }

    #[test]
    fn test_unrevoke() {
        assert!(RegistryCommands::has_subcommand("unrevoke"));
    }
}
