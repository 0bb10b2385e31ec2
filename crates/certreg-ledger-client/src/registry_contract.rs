use ethers::contract::abigen;
use ethers::core::k256::ecdsa::SigningKey;
use ethers::middleware::SignerMiddleware;
use ethers::prelude::Wallet;
use ethers::providers::{Http, Provider};

// Surface of the externally deployed registry. The signatures and events
// must stay byte-compatible with the contract; any change here breaks the
// join against already-issued certificates.
abigen!(
    CertificateRegistry,
    r"[
        function createCertificate(bytes32 id, string holderName, string course, uint32 year, bytes32 contentHash) external

        function updateCertificate(bytes32 id, string holderName, string course, uint32 year, bytes32 contentHash) external

        function revokeCertificate(bytes32 id, bool status) external

        function deleteCertificate(bytes32 id) external

        function verify(bytes32 id, bytes32 contentHash) external view returns (bool)

        function getCertificateCore(bytes32 id) external view returns (address issuer, uint32 year, bytes32 contentHash, bool revoked, bool present)

        function getCertificateText(bytes32 id) external view returns (string holderName, string course)

        function owner() external view returns (address)

        event Created(bytes32 indexed id, address indexed issuer)

        event Updated(bytes32 indexed id)

        event Revoked(bytes32 indexed id, bool status)

        event Deleted(bytes32 indexed id)
    ]"
);

pub type ReadClient = Provider<Http>;
pub type WriteClient = SignerMiddleware<Provider<Http>, Wallet<SigningKey>>;

pub type ReadContract = CertificateRegistry<ReadClient>;
pub type WriteContract = CertificateRegistry<WriteClient>;
