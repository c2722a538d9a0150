//! # Active Signer
//!
//! The opaque capability handed to the embedded widget once a connection succeeds.
//!
//! ## Variants
//!
//! - [`ExternalWalletProvider`]: wraps a provider produced by an interactive wallet
//!   connection. Signing goes through user-approved wallet prompts.
//! - [`EphemeralKeySigner`]: a secp256k1 key pair generated in memory. It signs
//!   without prompts, holds no funds and is never persisted.
//!
//! Both are wrapped in [`ActiveSigner`], and consumers only ever ask whether a
//! signer is present. The variant tag is available for log lines only.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use sha3::{Digest, Keccak256};

use crate::error::{AppError, Result};

/// A live provider object owned by an external collaborator (a wallet extension,
/// a hosted wallet SDK, a relay session).
///
/// Implementations live next to the collaborator; in the browser this wraps a
/// JavaScript object.
pub trait ProviderHandle: fmt::Debug {
    /// Chain the provider is currently connected to, when it reports one.
    fn chain_id(&self) -> Option<u64>;

    /// Accounts exposed by the provider, selected account first.
    fn accounts(&self) -> Vec<String>;

    /// Downcasting hook for the widget boundary.
    fn as_any(&self) -> &dyn Any;
}

/// Provider obtained through an interactive or connector-based wallet connection.
#[derive(Clone)]
pub struct ExternalWalletProvider {
    handle: Rc<dyn ProviderHandle>,
    source: String,
}

impl ExternalWalletProvider {
    /// Wrap a provider handle, recording which flow produced it.
    pub fn new(handle: Rc<dyn ProviderHandle>, source: impl Into<String>) -> Self {
        Self {
            handle,
            source: source.into(),
        }
    }

    pub fn handle(&self) -> &Rc<dyn ProviderHandle> {
        &self.handle
    }

    /// Name of the selection flow or connector that produced this provider.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Borrow the concrete handle type, if it matches.
    pub fn downcast_handle<T: 'static>(&self) -> Option<&T> {
        self.handle.as_any().downcast_ref::<T>()
    }

    /// True when both wrap the very same provider object.
    pub fn is_same_handle(&self, handle: &Rc<dyn ProviderHandle>) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.handle) as *const (),
            Rc::as_ptr(handle) as *const (),
        )
    }
}

impl fmt::Debug for ExternalWalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalWalletProvider")
            .field("source", &self.source)
            .field("handle", &self.handle)
            .finish()
    }
}

/// In-memory key pair created on demand so the demo works without a wallet.
///
/// The private scalar is zeroed when the key is dropped.
pub struct EphemeralKeySigner {
    signing_key: SigningKey,
    address: String,
}

impl EphemeralKeySigner {
    /// Generate a fresh random key pair from the operating system's CSPRNG.
    pub fn random() -> Self {
        Self::from_signing_key(SigningKey::random(&mut OsRng))
    }

    /// Build a signer from a raw 32-byte secret.
    pub fn from_secret_bytes(secret: &[u8]) -> Result<Self> {
        let signing_key = SigningKey::from_slice(secret)
            .map_err(|e| AppError::InvalidInput(format!("Invalid secp256k1 secret: {}", e)))?;
        Ok(Self::from_signing_key(signing_key))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = derive_address(&signing_key);
        Self {
            signing_key,
            address,
        }
    }

    /// EIP-55 checksummed address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// `0x`-prefixed private key. Only used to rebuild the signer on the widget side.
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.signing_key.to_bytes()))
    }
}

impl fmt::Debug for EphemeralKeySigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EphemeralKeySigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Ethereum address of a secp256k1 key: last 20 bytes of Keccak-256(pubkey).
fn derive_address(signing_key: &SigningKey) -> String {
    let point = signing_key.verifying_key().to_encoded_point(false);
    let hash = Keccak256::digest(&point.as_bytes()[1..]);
    to_checksum_address(&hash[12..])
}

/// EIP-55 mixed-case checksum encoding of a 20-byte address.
pub fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Which connection path produced a signer. Used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerKind {
    External,
    Ephemeral,
}

impl fmt::Display for SignerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignerKind::External => write!(f, "external wallet"),
            SignerKind::Ephemeral => write!(f, "ephemeral key"),
        }
    }
}

/// The single signer a connected session holds.
///
/// Cloning is cheap and never duplicates key material.
#[derive(Clone, Debug)]
pub enum ActiveSigner {
    External(ExternalWalletProvider),
    Ephemeral(Rc<EphemeralKeySigner>),
}

impl ActiveSigner {
    pub fn external(handle: Rc<dyn ProviderHandle>, source: impl Into<String>) -> Self {
        ActiveSigner::External(ExternalWalletProvider::new(handle, source))
    }

    pub fn ephemeral(signer: EphemeralKeySigner) -> Self {
        ActiveSigner::Ephemeral(Rc::new(signer))
    }

    /// Address the signer acts for, when known.
    pub fn address(&self) -> Option<String> {
        match self {
            ActiveSigner::External(provider) => provider.handle().accounts().into_iter().next(),
            ActiveSigner::Ephemeral(signer) => Some(signer.address().to_string()),
        }
    }

    /// Chain identity. Ephemeral keys are network-agnostic and report none.
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            ActiveSigner::External(provider) => provider.handle().chain_id(),
            ActiveSigner::Ephemeral(_) => None,
        }
    }

    pub fn kind(&self) -> SignerKind {
        match self {
            ActiveSigner::External(_) => SignerKind::External,
            ActiveSigner::Ephemeral(_) => SignerKind::Ephemeral,
        }
    }

    /// True when both refer to the same underlying provider or key.
    pub fn same_signer(&self, other: &ActiveSigner) -> bool {
        match (self, other) {
            (ActiveSigner::External(a), ActiveSigner::External(b)) => a.is_same_handle(b.handle()),
            (ActiveSigner::Ephemeral(a), ActiveSigner::Ephemeral(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::MockProvider;
    use super::*;

    #[test]
    fn test_known_key_address() {
        let secret =
            hex::decode("4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318")
                .unwrap();
        let signer = EphemeralKeySigner::from_secret_bytes(&secret).unwrap();

        assert_eq!(signer.address(), "0x2c7536E3605D9C16a7a3D7b1898e529396a65c23");
        assert_eq!(
            signer.private_key_hex(),
            "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318"
        );
    }

    #[test]
    fn test_checksum_address() {
        let raw = hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(
            to_checksum_address(&raw),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );

        let raw = hex::decode("fb6916095ca1df60bb79ce92ce3ea74c37c5d359").unwrap();
        assert_eq!(
            to_checksum_address(&raw),
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
        );
    }

    #[test]
    fn test_invalid_secret_rejected() {
        assert!(EphemeralKeySigner::from_secret_bytes(&[0u8; 32]).is_err());
        assert!(EphemeralKeySigner::from_secret_bytes(&[1u8; 5]).is_err());
    }

    #[test]
    fn test_random_keys_are_distinct() {
        let a = EphemeralKeySigner::random();
        let b = EphemeralKeySigner::random();

        assert_ne!(a.address(), b.address());
        assert!(a.address().starts_with("0x"));
        assert_eq!(a.address().len(), 42);
    }

    #[test]
    fn test_debug_hides_private_key() {
        let signer = EphemeralKeySigner::random();
        let printed = format!("{signer:?}");
        let secret = signer.private_key_hex();

        assert!(!printed.contains(&secret[2..]));
        assert!(printed.contains(signer.address()));
    }

    #[test]
    fn test_active_signer_identity() {
        let handle = MockProvider::on_chain(1, "0xabc");
        let external = ActiveSigner::external(handle.clone(), "metamask");

        assert_eq!(external.chain_id(), Some(1));
        assert_eq!(external.address().as_deref(), Some("0xabc"));
        assert_eq!(external.kind(), SignerKind::External);

        let ephemeral = ActiveSigner::ephemeral(EphemeralKeySigner::random());
        assert_eq!(ephemeral.chain_id(), None);
        assert!(ephemeral.address().is_some());
        assert_eq!(ephemeral.kind(), SignerKind::Ephemeral);
    }

    #[test]
    fn test_same_signer() {
        let handle = MockProvider::on_chain(1, "0xabc");
        let a = ActiveSigner::external(handle.clone(), "metamask");
        let b = ActiveSigner::external(handle, "metamask");
        let c = ActiveSigner::external(MockProvider::on_chain(1, "0xabc"), "metamask");

        assert!(a.same_signer(&b));
        assert!(!a.same_signer(&c));

        let key = ActiveSigner::ephemeral(EphemeralKeySigner::random());
        assert!(key.same_signer(&key.clone()));
        assert!(!key.same_signer(&a));
    }

    #[test]
    fn test_downcast_handle() {
        let provider = ExternalWalletProvider::new(MockProvider::on_chain(5, "0x1"), "test");
        let mock = provider.downcast_handle::<MockProvider>().unwrap();
        assert_eq!(mock.chain_id, Some(5));
        assert!(provider.downcast_handle::<String>().is_none());
    }
}
