use certreg_config::registry::RegistryConfig;
use certreg_crypto::identity::{derive_certificate_id, derive_content_hash};
use certreg_crypto::keys::RegistrySigner;
use certreg_crypto::types::{CertificateFields, CertificateId, ContentHash};
use certreg_ledger_client::{Error, RegistryClient};

pub(crate) fn configured_signer(config: &RegistryConfig) -> Result<RegistrySigner, Error> {
    let key = config
        .private_key
        .as_deref()
        .ok_or(Error::NoIdentityProvider)?;

    Ok(key.parse()?)
}

pub(crate) async fn authenticated_client(config: &RegistryConfig) -> Result<RegistryClient, Error> {
    let signer = configured_signer(config)?;
    let contract_address = contract_address(config)?;

    RegistryClient::connect_with_signer(&config.endpoint, contract_address, &signer).await
}

pub(crate) fn contract_address(config: &RegistryConfig) -> Result<&str, Error> {
    config
        .contract_address
        .as_deref()
        .ok_or_else(|| Error::MalformedInput {
            message: "no contract address configured".to_string(),
        })
}

/// Reuse caller-supplied id/hash values when given, otherwise derive both
/// from the field tuple.
pub(crate) fn resolve_id_and_hash(
    fields: &CertificateFields,
    id: &Option<String>,
    content_hash: &Option<String>,
) -> Result<(CertificateId, ContentHash), Error> {
    let id = match id {
        Some(raw) => raw.parse()?,
        None => derive_certificate_id(fields),
    };
    let content_hash = match content_hash {
        Some(raw) => raw.parse()?,
        None => derive_content_hash(fields)?,
    };

    Ok((id, content_hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use certreg_crypto::types::parse_account_address;

    fn sample_fields() -> CertificateFields {
        CertificateFields {
            holder_name: "Alice".into(),
            roll_number: "R1".into(),
            course: "CS".into(),
            year: 2024,
            issuer: parse_account_address("0xd0d409f68de81b314612474bf10e0cf98252e91a").unwrap(),
        }
    }

    #[test]
    fn missing_private_key_is_no_identity_provider() {
        let config = RegistryConfig::default();
        assert!(matches!(
            configured_signer(&config),
            Err(Error::NoIdentityProvider)
        ));
    }

    #[test]
    fn explicit_id_and_hash_are_reused_verbatim() {
        let fields = sample_fields();
        let id = "0x0101010101010101010101010101010101010101010101010101010101010101";
        let hash = "0x0202020202020202020202020202020202020202020202020202020202020202";

        let (parsed_id, parsed_hash) =
            resolve_id_and_hash(&fields, &Some(id.into()), &Some(hash.into())).unwrap();

        assert_eq!(parsed_id.to_string(), id);
        assert_eq!(parsed_hash.to_string(), hash);
    }

    #[test]
    fn omitted_id_and_hash_are_derived() {
        let fields = sample_fields();
        let (id, hash) = resolve_id_and_hash(&fields, &None, &None).unwrap();

        assert_eq!(id, derive_certificate_id(&fields));
        assert_eq!(hash, derive_content_hash(&fields).unwrap());
    }

    #[test]
    fn malformed_explicit_id_is_rejected() {
        let fields = sample_fields();
        let result = resolve_id_and_hash(&fields, &Some("0xzz".into()), &None);
        assert!(matches!(result, Err(Error::MalformedInput { .. })));
    }
}
