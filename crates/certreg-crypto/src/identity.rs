//! Deterministic derivation of certificate identifiers and content hashes.
//!
//! The id is the join key against an independently deployed registry
//! contract, so both derivations must reproduce the exact byte sequences the
//! original issuer computed. The id hashes the Solidity tightly-packed
//! encoding of the field tuple; the content hash commits to the canonical
//! JSON serialization of the same tuple.

use crate::hash::calculate_hash;
use crate::types::{CertificateFields, CertificateId, ContentHash};
use crate::Error;

/// Derive the 32-byte certificate id from the field tuple.
///
/// Equivalent to
/// `keccak256(abi.encodePacked(holderName, rollNo, course, uint32(year), issuer))`:
/// strings contribute their raw UTF-8 bytes, the year its 4 big-endian
/// bytes, the issuer its 20 address bytes.
pub fn derive_certificate_id(fields: &CertificateFields) -> CertificateId {
    let mut data = Vec::with_capacity(
        fields.holder_name.len() + fields.roll_number.len() + fields.course.len() + 24,
    );
    data.extend_from_slice(fields.holder_name.as_bytes());
    data.extend_from_slice(fields.roll_number.as_bytes());
    data.extend_from_slice(fields.course.as_bytes());
    data.extend_from_slice(&fields.year.to_be_bytes());
    data.extend_from_slice(fields.issuer.as_bytes());

    CertificateId::from(calculate_hash(&data))
}

/// Derive the content hash from the field tuple.
///
/// The canonical form is the compact JSON object
/// `{"holderName":…,"rollNo":…,"course":…,"year":<number>,"issuer":"0x…"}`
/// with the issuer rendered as lowercase hex. A verifier recomputing this
/// hash from claimed field values can compare it against the on-ledger one
/// without issuing a transaction.
pub fn derive_content_hash(fields: &CertificateFields) -> Result<ContentHash, Error> {
    let canonical = serde_json::to_vec(fields)?;
    Ok(ContentHash::from(calculate_hash(&canonical)))
}
