use ethers::types::H256;
use serde::{Deserialize, Serialize};

pub use ethers::types::Address;
use std::str::FromStr;
use thiserror::Error;

pub const ACCOUNT_ADDRESS_LENGTH: usize = 20;
pub const DIGEST_LENGTH: usize = 32;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse hex digest string as H256")]
    DigestParseError,
    #[error("Invalid digest byte length: {0}")]
    InvalidDigestLength(String),
    #[error("Failed to parse account address string as H160")]
    AddressParseError,
}

/// Primary key of a certificate record on the ledger, derived from the
/// certificate fields with [`crate::identity::derive_certificate_id`].
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub struct CertificateId(H256);

impl CertificateId {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_fixed_bytes(self) -> [u8; 32] {
        self.0 .0
    }
}

impl From<[u8; 32]> for CertificateId {
    fn from(bytes: [u8; 32]) -> Self {
        CertificateId(H256(bytes))
    }
}

impl From<H256> for CertificateId {
    fn from(digest: H256) -> Self {
        CertificateId(digest)
    }
}

impl FromStr for CertificateId {
    type Err = Error;

    fn from_str(digest: &str) -> Result<Self, Self::Err> {
        parse_digest(digest).map(CertificateId)
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Digest of the canonical serialization of the certificate fields, stored
/// on-ledger next to the record and compared during verification.
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub struct ContentHash(H256);

impl ContentHash {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_fixed_bytes(self) -> [u8; 32] {
        self.0 .0
    }
}

impl From<[u8; 32]> for ContentHash {
    fn from(bytes: [u8; 32]) -> Self {
        ContentHash(H256(bytes))
    }
}

impl FromStr for ContentHash {
    type Err = Error;

    fn from_str(digest: &str) -> Result<Self, Self::Err> {
        parse_digest(digest).map(ContentHash)
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Input tuple a certificate is minted from. The field order and the serde
/// names are part of the wire format: the canonical JSON serialization of
/// this struct is what the content hash commits to.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateFields {
    pub holder_name: String,
    #[serde(rename = "rollNo")]
    pub roll_number: String,
    pub course: String,
    pub year: u32,
    pub issuer: Address,
}

fn parse_digest(digest: &str) -> Result<H256, Error> {
    let raw = digest.strip_prefix("0x").unwrap_or(digest);
    let bytes = hex::decode(raw).map_err(|_| Error::DigestParseError)?;
    if bytes.len() != DIGEST_LENGTH {
        return Err(Error::InvalidDigestLength(format!(
            "expected {} bytes, got {}",
            DIGEST_LENGTH,
            bytes.len()
        )));
    }
    Ok(H256::from_slice(&bytes))
}

pub fn parse_account_address(address: &str) -> Result<Address, Error> {
    let raw = address.strip_prefix("0x").unwrap_or(address);
    let bytes = hex::decode(raw).map_err(|_| Error::AddressParseError)?;
    if bytes.len() != ACCOUNT_ADDRESS_LENGTH {
        return Err(Error::AddressParseError);
    }
    Ok(Address::from_slice(&bytes))
}
