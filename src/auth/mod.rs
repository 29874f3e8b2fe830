//! Wallet nonce handshake.
//!
//! A client asks for a nonce bound to its wallet address, signs a message embedding
//! `Nonce:<value>` with the wallet's ed25519 key and posts it back. A nonce is good for
//! one successful verification within its time-to-live.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use rand::Rng;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::VerifyRequest;

const INVALID_NONCE: &str = "Invalid or expired nonce";
const SIGNATURE_FAILED: &str = "Signature verification failed";
const VERIFICATION_ERROR: &str = "Verification error";

#[derive(Debug, Clone, Copy)]
struct IssuedNonce {
    value: u32,
    issued_at: Instant,
}

/// In-memory registry of outstanding nonces, one per address.
pub struct NonceRegistry {
    issued: RwLock<HashMap<String, IssuedNonce>>,
    ttl: Duration,
}

impl NonceRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            issued: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Issue a fresh nonce for `address`, replacing any earlier one.
    pub async fn issue(&self, address: &str) -> u32 {
        let value = rand::thread_rng().gen_range(1..1_000_000);
        self.issued.write().await.insert(
            address.to_string(),
            IssuedNonce {
                value,
                issued_at: Instant::now(),
            },
        );
        value
    }

    /// Check a signed message and consume the nonce on success.
    ///
    /// Returns an opaque session token. Nothing else in the server checks it.
    pub async fn verify(&self, request: &VerifyRequest) -> Result<String, AppError> {
        let mut issued = self.issued.write().await;

        let nonce = match issued.get(&request.address).copied() {
            Some(nonce) if nonce.issued_at.elapsed() >= self.ttl => {
                issued.remove(&request.address);
                return Err(AppError::Unauthorized(INVALID_NONCE.to_string()));
            }
            Some(nonce) => nonce,
            None => return Err(AppError::Unauthorized(INVALID_NONCE.to_string())),
        };

        if !request.message.contains(&format!("Nonce:{}", nonce.value)) {
            return Err(AppError::Unauthorized(INVALID_NONCE.to_string()));
        }

        if !verify_signature(&request.address, &request.message, &request.signature)? {
            return Err(AppError::Unauthorized(SIGNATURE_FAILED.to_string()));
        }

        issued.remove(&request.address);
        tracing::info!("Wallet {} verified", request.address);
        Ok(format!("session-{}", uuid::Uuid::new_v4().simple()))
    }
}

/// Verify `signature` over `message` with the base58 wallet address as public key.
///
/// Malformed keys or signatures are errors; a well-formed signature that does not
/// match is `Ok(false)`.
fn verify_signature(address: &str, message: &str, signature: &[u8]) -> Result<bool, AppError> {
    let key_bytes: [u8; 32] = bs58::decode(address)
        .into_vec()
        .ok()
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            tracing::warn!("Undecodable wallet address {}", address);
            AppError::Internal(VERIFICATION_ERROR.to_string())
        })?;
    let key = VerifyingKey::from_bytes(&key_bytes)
        .map_err(|_| AppError::Internal(VERIFICATION_ERROR.to_string()))?;

    let sig_bytes: [u8; 64] = signature
        .try_into()
        .map_err(|_| AppError::Internal(VERIFICATION_ERROR.to_string()))?;
    let signature = Signature::from_bytes(&sig_bytes);

    Ok(key.verify(message.as_bytes(), &signature).is_ok())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::codes;
    use ed25519_dalek::{Signer, SigningKey};

    pub(crate) fn wallet() -> (SigningKey, String) {
        let key = SigningKey::from_bytes(&[7u8; 32]);
        let address = bs58::encode(key.verifying_key().to_bytes()).into_string();
        (key, address)
    }

    pub(crate) fn signed(key: &SigningKey, address: &str, message: &str) -> VerifyRequest {
        VerifyRequest {
            address: address.to_string(),
            message: message.to_string(),
            signature: key.sign(message.as_bytes()).to_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn test_valid_signature_consumes_nonce() {
        let registry = NonceRegistry::new(Duration::from_secs(60));
        let (key, address) = wallet();

        let nonce = registry.issue(&address).await;
        let message = format!("Sign in to Campus Board Nonce:{}", nonce);
        let request = signed(&key, &address, &message);

        let token = registry.verify(&request).await.unwrap();
        assert!(token.starts_with("session-"));

        let replay = registry.verify(&request).await.unwrap_err();
        assert_eq!(replay.message(), INVALID_NONCE);
    }

    #[tokio::test]
    async fn test_message_without_nonce_rejected() {
        let registry = NonceRegistry::new(Duration::from_secs(60));
        let (key, address) = wallet();
        registry.issue(&address).await;

        let err = registry
            .verify(&signed(&key, &address, "Sign in to Campus Board"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), codes::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_signer_rejected_and_nonce_kept() {
        let registry = NonceRegistry::new(Duration::from_secs(60));
        let (key, address) = wallet();
        let impostor = SigningKey::from_bytes(&[9u8; 32]);

        let nonce = registry.issue(&address).await;
        let message = format!("Nonce:{}", nonce);

        let err = registry
            .verify(&signed(&impostor, &address, &message))
            .await
            .unwrap_err();
        assert_eq!(err.message(), SIGNATURE_FAILED);

        // The rightful owner can still use the nonce
        assert!(registry.verify(&signed(&key, &address, &message)).await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_nonce_rejected() {
        let registry = NonceRegistry::new(Duration::ZERO);
        let (key, address) = wallet();
        let nonce = registry.issue(&address).await;

        let err = registry
            .verify(&signed(&key, &address, &format!("Nonce:{}", nonce)))
            .await
            .unwrap_err();
        assert_eq!(err.message(), INVALID_NONCE);
    }

    #[tokio::test]
    async fn test_malformed_input_is_internal_error() {
        let registry = NonceRegistry::new(Duration::from_secs(60));
        let nonce = registry.issue("not-base58-0OIl").await;

        let err = registry
            .verify(&VerifyRequest {
                address: "not-base58-0OIl".to_string(),
                message: format!("Nonce:{}", nonce),
                signature: vec![0; 64],
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), codes::INTERNAL_ERROR);

        let (_, address) = wallet();
        let nonce = registry.issue(&address).await;
        let err = registry
            .verify(&VerifyRequest {
                address,
                message: format!("Nonce:{}", nonce),
                signature: vec![1, 2, 3],
            })
            .await
            .unwrap_err();
        assert_eq!(err.message(), VERIFICATION_ERROR);
    }

    #[tokio::test]
    async fn test_reissue_keeps_latest_nonce() {
        let registry = NonceRegistry::new(Duration::from_secs(60));
        let (key, address) = wallet();

        registry.issue(&address).await;
        let latest = registry.issue(&address).await;
        assert_eq!(registry.issued.read().await.len(), 1);

        let message = format!("Nonce:{}", latest);
        assert!(registry.verify(&signed(&key, &address, &message)).await.is_ok());
    }
}
