use std::path::Path;

use figment::providers::{Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::Config;

const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegistryConfig {
    /// JSON-RPC endpoint of the ledger node.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Address of the deployed certificate registry contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,

    /// Hex-encoded private key of the issuing account. Read paths work
    /// without it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            endpoint: default_endpoint(),
            contract_address: None,
            private_key: None,
        }
    }
}

impl Config for RegistryConfig {
    type Output = RegistryConfig;

    fn load_from_file(figment: Figment, home: &Path) -> Figment {
        let home = home.join("config.toml");

        figment.merge(Toml::file(home))
    }

    fn load_context(figment: Figment) -> Result<Self::Output, figment::Error> {
        figment.extract()
    }

    fn profile() -> String {
        "default".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_config;

    #[derive(Serialize)]
    struct NoOverrides {}

    #[derive(Serialize)]
    struct EndpointOverride {
        endpoint: String,
    }

    #[test]
    fn missing_file_yields_defaults() {
        figment::Jail::expect_with(|jail| {
            let config: RegistryConfig =
                load_config::<RegistryConfig, NoOverrides>(jail.directory(), None);

            assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
            assert_eq!(config.contract_address, None);
            assert_eq!(config.private_key, None);
            Ok(())
        });
    }

    #[test]
    fn file_values_are_loaded() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    endpoint = "http://127.0.0.1:9933"
                    contract_address = "0xd0d409f68de81b314612474bf10e0cf98252e91a"
                "#,
            )?;

            let config: RegistryConfig =
                load_config::<RegistryConfig, NoOverrides>(jail.directory(), None);

            assert_eq!(config.endpoint, "http://127.0.0.1:9933");
            assert_eq!(
                config.contract_address.as_deref(),
                Some("0xd0d409f68de81b314612474bf10e0cf98252e91a")
            );
            Ok(())
        });
    }

    #[test]
    fn command_line_overrides_the_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", r#"endpoint = "http://127.0.0.1:9933""#)?;

            let overrides = EndpointOverride {
                endpoint: "http://10.0.0.1:8545".to_string(),
            };
            let config: RegistryConfig =
                load_config::<RegistryConfig, _>(jail.directory(), Some(overrides));

            assert_eq!(config.endpoint, "http://10.0.0.1:8545");
            Ok(())
        });
    }
}
