//! Gateway to the certificate registry contract.
//!
//! [`RegistryClient`] is the session object handed down from the CLI: it
//! owns a read-only contract handle and, when key material is configured, a
//! wallet-authenticated write handle. Mutating calls go through one shared
//! confirmation path; success means the transaction was mined and did not
//! revert, not merely that it was submitted. The client performs no retries
//! and tracks no in-flight queue. Each call is independent.

pub mod registry_contract;

use std::sync::Arc;

use ethers::contract::{ContractCall, ContractError};
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::Signer;
use ethers::types::{Address, TransactionReceipt, U64};
use thiserror::Error;
use tracing::{debug, info};

use certreg_crypto::keys::RegistrySigner;
use certreg_crypto::types::{parse_account_address, CertificateId, ContentHash};

use crate::registry_contract::{CertificateRegistry, ReadContract, WriteClient, WriteContract};

#[derive(Debug, Error)]
pub enum Error {
    #[error("no signing key is configured")]
    NoIdentityProvider,

    #[error("a mutating call requires an authenticated signer")]
    AuthRequired,

    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    #[error("transaction rejected by the ledger: {message}")]
    TransactionRejected { message: String },

    #[error("transport unavailable: {message}")]
    TransportUnavailable { message: String },

    #[error("hex data decoding error: {source}")]
    HexDecodingError {
        #[from]
        source: hex::FromHexError,
    },

    #[error("key error: {source}")]
    KeyError {
        #[from]
        source: certreg_crypto::Error,
    },
}

impl From<certreg_crypto::types::Error> for Error {
    fn from(error: certreg_crypto::types::Error) -> Self {
        Error::MalformedInput {
            message: error.to_string(),
        }
    }
}

/// Core record columns held by the ledger. `present` is the existence
/// marker: `false` means the id was never issued or has been deleted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateCore {
    pub issuer: Address,
    pub year: u32,
    pub content_hash: ContentHash,
    pub revoked: bool,
    pub present: bool,
}

/// Text columns of a record, retrieved separately from the core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateText {
    pub holder_name: String,
    pub course: String,
}

pub struct RegistryClient {
    read_contract: ReadContract,
    write_contract: Option<WriteContract>,
    signer_address: Option<Address>,
}

impl RegistryClient {
    /// Build a read-only client. No network traffic happens here; the
    /// endpoint is only validated as a URL.
    pub fn connect(endpoint: &str, contract_address: &str) -> Result<Self, Error> {
        info!("Connecting to ledger node at endpoint: {}", endpoint);
        let provider = Provider::<Http>::try_from(endpoint).map_err(|e| Error::MalformedInput {
            message: format!("invalid endpoint url: {e}"),
        })?;
        let address = parse_account_address(contract_address)?;
        let read_contract = CertificateRegistry::new(address, Arc::new(provider));

        Ok(RegistryClient {
            read_contract,
            write_contract: None,
            signer_address: None,
        })
    }

    /// Build an authenticated client. The chain id is queried up front so
    /// the signer is bound to the network it is actually talking to.
    pub async fn connect_with_signer(
        endpoint: &str,
        contract_address: &str,
        signer: &RegistrySigner,
    ) -> Result<Self, Error> {
        info!("Connecting to ledger node at endpoint: {}", endpoint);
        let provider = Provider::<Http>::try_from(endpoint).map_err(|e| Error::MalformedInput {
            message: format!("invalid endpoint url: {e}"),
        })?;
        let address = parse_account_address(contract_address)?;

        let chain_id = provider
            .get_chainid()
            .await
            .map_err(|e| Error::TransportUnavailable {
                message: e.to_string(),
            })?;
        let wallet = signer.wallet.clone().with_chain_id(chain_id.as_u64());
        let signer_address = wallet.address();
        debug!(
            "Using signer account 0x{} on chain {}",
            hex::encode(signer_address),
            chain_id
        );

        let write_client = Arc::new(SignerMiddleware::new(provider.clone(), wallet));
        let read_contract = CertificateRegistry::new(address, Arc::new(provider));
        let write_contract = Some(CertificateRegistry::new(address, write_client));

        Ok(RegistryClient {
            read_contract,
            write_contract,
            signer_address: Some(signer_address),
        })
    }

    /// Account the write handle signs with, if one is connected.
    pub fn signer_address(&self) -> Option<Address> {
        self.signer_address
    }

    pub async fn create(
        &self,
        id: CertificateId,
        holder_name: &str,
        course: &str,
        year: u32,
        content_hash: ContentHash,
    ) -> Result<TransactionReceipt, Error> {
        let contract = self.write_contract()?;
        let call = contract.create_certificate(
            id.into_fixed_bytes(),
            holder_name.to_owned(),
            course.to_owned(),
            year,
            content_hash.into_fixed_bytes(),
        );
        self.confirm("createCertificate", call).await
    }

    /// Same shape as `create`. Whether updating a missing or foreign record
    /// is allowed is the contract's decision; no preconditions are checked
    /// here.
    pub async fn update(
        &self,
        id: CertificateId,
        holder_name: &str,
        course: &str,
        year: u32,
        content_hash: ContentHash,
    ) -> Result<TransactionReceipt, Error> {
        let contract = self.write_contract()?;
        let call = contract.update_certificate(
            id.into_fixed_bytes(),
            holder_name.to_owned(),
            course.to_owned(),
            year,
            content_hash.into_fixed_bytes(),
        );
        self.confirm("updateCertificate", call).await
    }

    /// Toggle the revoked flag; covers both revoke and unrevoke.
    pub async fn set_revoked(
        &self,
        id: CertificateId,
        status: bool,
    ) -> Result<TransactionReceipt, Error> {
        let contract = self.write_contract()?;
        let call = contract.revoke_certificate(id.into_fixed_bytes(), status);
        self.confirm("revokeCertificate", call).await
    }

    pub async fn delete(&self, id: CertificateId) -> Result<TransactionReceipt, Error> {
        let contract = self.write_contract()?;
        let call = contract.delete_certificate(id.into_fixed_bytes());
        self.confirm("deleteCertificate", call).await
    }

    /// Whether the stored content hash for `id` matches `content_hash`.
    /// Works without any signer.
    pub async fn verify(
        &self,
        id: CertificateId,
        content_hash: ContentHash,
    ) -> Result<bool, Error> {
        self.read_contract
            .verify(id.into_fixed_bytes(), content_hash.into_fixed_bytes())
            .call()
            .await
            .map_err(call_error)
    }

    pub async fn fetch_core(&self, id: CertificateId) -> Result<CertificateCore, Error> {
        let (issuer, year, content_hash, revoked, present) = self
            .read_contract
            .get_certificate_core(id.into_fixed_bytes())
            .call()
            .await
            .map_err(call_error)?;

        Ok(CertificateCore {
            issuer,
            year,
            content_hash: ContentHash::from(content_hash),
            revoked,
            present,
        })
    }

    pub async fn fetch_text(&self, id: CertificateId) -> Result<CertificateText, Error> {
        let (holder_name, course) = self
            .read_contract
            .get_certificate_text(id.into_fixed_bytes())
            .call()
            .await
            .map_err(call_error)?;

        Ok(CertificateText {
            holder_name,
            course,
        })
    }

    pub async fn registry_owner(&self) -> Result<Address, Error> {
        self.read_contract.owner().call().await.map_err(call_error)
    }

    fn write_contract(&self) -> Result<&WriteContract, Error> {
        self.write_contract.as_ref().ok_or(Error::AuthRequired)
    }

    /// Shared path for every mutating call: submit, log the transaction
    /// hash, await the receipt, reject mined-but-reverted transactions.
    async fn confirm(
        &self,
        operation: &str,
        call: ContractCall<WriteClient, ()>,
    ) -> Result<TransactionReceipt, Error> {
        let pending = call.send().await.map_err(call_error)?;
        let tx_hash = *pending;
        info!(
            "{} submitted in transaction 0x{}",
            operation,
            hex::encode(tx_hash)
        );

        let receipt = pending
            .await
            .map_err(|e| Error::TransportUnavailable {
                message: e.to_string(),
            })?
            .ok_or_else(|| Error::TransactionRejected {
                message: format!(
                    "transaction 0x{} was dropped before confirmation",
                    hex::encode(tx_hash)
                ),
            })?;

        if receipt.status == Some(U64::from(1)) {
            info!(
                "{} confirmed in block {:?}",
                operation, receipt.block_number
            );
            Ok(receipt)
        } else {
            Err(Error::TransactionRejected {
                message: format!("transaction 0x{} reverted", hex::encode(tx_hash)),
            })
        }
    }
}

fn call_error<M: Middleware>(error: ContractError<M>) -> Error {
    match error {
        ContractError::Revert(ref data) => Error::TransactionRejected {
            message: error
                .decode_revert::<String>()
                .unwrap_or_else(|| format!("execution reverted ({} bytes of revert data)", data.len())),
        },
        ContractError::MiddlewareError { e } => Error::TransportUnavailable {
            message: e.to_string(),
        },
        ContractError::ProviderError { e } => Error::TransportUnavailable {
            message: e.to_string(),
        },
        other => Error::TransactionRejected {
            message: other.to_string(),
        },
    }
}
