use certreg_crypto::types::{CertificateId, ContentHash};
use certreg_ledger_client::{Error, RegistryClient};
use test_log::test;

const CONTRACT_ADDRESS: &str = "0xd0d409f68de81b314612474bf10e0cf98252e91a";
const ENDPOINT: &str = "http://localhost:8545";

// Building a read-only client touches no network, so the pre-submission
// failure paths are testable offline.

#[test(tokio::test)]
async fn create_without_signer_is_auth_required() {
    let client = RegistryClient::connect(ENDPOINT, CONTRACT_ADDRESS).unwrap();
    let result = client
        .create(
            CertificateId::from([1u8; 32]),
            "Alice",
            "CS",
            2024,
            ContentHash::from([2u8; 32]),
        )
        .await;

    assert!(matches!(result, Err(Error::AuthRequired)));
}

#[test(tokio::test)]
async fn revoke_and_delete_without_signer_are_auth_required() {
    let client = RegistryClient::connect(ENDPOINT, CONTRACT_ADDRESS).unwrap();
    let id = CertificateId::from([3u8; 32]);

    assert!(matches!(
        client.set_revoked(id, true).await,
        Err(Error::AuthRequired)
    ));
    assert!(matches!(client.delete(id).await, Err(Error::AuthRequired)));
}

#[test]
fn read_only_client_has_no_signer_address() {
    let client = RegistryClient::connect(ENDPOINT, CONTRACT_ADDRESS).unwrap();
    assert_eq!(client.signer_address(), None);
}

#[test]
fn malformed_contract_address_is_rejected() {
    let result = RegistryClient::connect(ENDPOINT, "0x1234");
    assert!(matches!(result, Err(Error::MalformedInput { .. })));
}

#[test]
fn malformed_endpoint_is_rejected() {
    let result = RegistryClient::connect("not a url", CONTRACT_ADDRESS);
    assert!(matches!(result, Err(Error::MalformedInput { .. })));
}
