pub mod registry;

use std::path::Path;

use figment::error::Kind;
use figment::providers::Serialized;
use figment::Figment;
use serde::Serialize;

pub trait Config: Serialize {
    /// The configuration type returned (should be Self).
    type Output;

    /// Load the configuration from a file or multiple files.
    /// The home is the directory where the configuration files are located.
    fn load_from_file(figment: Figment, home: &Path) -> Figment;

    /// Trying to extract the configuration from the figment context.
    fn load_context(figment: Figment) -> Result<Self::Output, figment::Error>;

    /// Return the profile name of the configuration to be used
    /// when merging command line overrides.
    fn profile() -> String;

    /// Main function to load the configuration.
    /// It will load the configuration from the file and the command line (if any)
    /// and then extract the configuration from the context in order to build the Config.
    /// The Config is then returned or an error if the configuration is not valid.
    fn load<S: Serialize>(home: &Path, command: Option<S>) -> Result<Self::Output, figment::Error> {
        let mut figment = Figment::new();

        figment = Self::load_from_file(figment, home);

        if let Some(command) = command {
            figment = figment.merge(Serialized::from(command, Self::profile()))
        }

        Self::load_context(figment)
    }
}

pub fn load_config<T: Config, S: Serialize>(home: &Path, command: Option<S>) -> T::Output {
    match T::load(home, command) {
        Ok(config) => config,
        Err(figment::Error {
            kind: Kind::MissingField(name),
            ..
        }) => {
            println!("Missing field: {}", name);
            std::process::exit(1);
        }
        Err(e) => {
            println!("Failed to load config: {e}");
            std::process::exit(1);
        }
    }
}
