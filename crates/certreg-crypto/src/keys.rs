use ethers::signers::{LocalWallet, Signer};
use ethers::types::Address;
use std::str::FromStr;

use crate::Error;

/// Local signing identity standing in for the browser wallet: a secp256k1
/// key plus its derived account address.
#[derive(Debug, Clone)]
pub struct RegistrySigner {
    pub address: Address,
    pub wallet: LocalWallet,
}

impl FromStr for RegistrySigner {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(raw)
            .map_err(|_| Error::InvalidKeyError("private key is not valid hex".to_string()))?;

        Self::new(&decoded)
    }
}

impl RegistrySigner {
    pub fn new(private_key: &[u8]) -> Result<Self, Error> {
        let wallet = LocalWallet::from_bytes(private_key)
            .map_err(|_| Error::InvalidKeyError("unable to parse private key".to_string()))?;

        Ok(Self {
            address: wallet.address(),
            wallet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known development key (first account of the hardhat/anvil set).
    const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn signer_address_is_derived_from_key() {
        let signer: RegistrySigner = DEV_KEY.parse().unwrap();
        assert_eq!(format!("0x{}", hex::encode(signer.address)), DEV_ADDRESS);
    }

    #[test]
    fn prefixed_and_unprefixed_keys_are_equivalent() {
        let plain: RegistrySigner = DEV_KEY.parse().unwrap();
        let prefixed: RegistrySigner = format!("0x{DEV_KEY}").parse().unwrap();
        assert_eq!(plain.address, prefixed.address);
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert!("zz".parse::<RegistrySigner>().is_err());
        assert!("".parse::<RegistrySigner>().is_err());
    }
}
