//! Actor identity resolution.
//!
//! A connected wallet address is the actor id. Without one, a guest id is minted
//! once, kept in its own slot and reused from then on.

use std::sync::{Arc, Mutex};

use crate::errors::AppError;
use crate::slots::DurableSlots;

/// Slot holding the minted guest id.
pub const GUEST_ID_SLOT: &str = "guestId";

pub struct IdentityProvider {
    slots: Arc<dyn DurableSlots>,
    mint: Mutex<()>,
}

impl IdentityProvider {
    pub fn new(slots: Arc<dyn DurableSlots>) -> Self {
        Self {
            slots,
            mint: Mutex::new(()),
        }
    }

    /// Resolve the actor id for an optional wallet address.
    pub fn resolve(&self, wallet: Option<&str>) -> Result<String, AppError> {
        if let Some(address) = wallet.filter(|w| !w.is_empty()) {
            return Ok(address.to_string());
        }

        // Read-then-mint must not interleave, or two callers could mint different ids
        let _guard = self
            .mint
            .lock()
            .map_err(|_| AppError::Internal("identity lock poisoned".to_string()))?;

        if let Some(existing) = self.slots.read(GUEST_ID_SLOT)? {
            if !existing.is_empty() {
                return Ok(existing);
            }
        }

        let guest_id = mint_guest_id();
        self.slots.write(GUEST_ID_SLOT, &guest_id)?;
        tracing::info!("Minted guest id {}", guest_id);
        Ok(guest_id)
    }
}

fn mint_guest_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("guest-{}", &uuid[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::{FileSlots, MemorySlots};

    #[test]
    fn test_wallet_address_used_verbatim() {
        let identity = IdentityProvider::new(Arc::new(MemorySlots::default()));
        let actor = identity
            .resolve(Some("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU"))
            .unwrap();
        assert_eq!(actor, "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU");
    }

    #[test]
    fn test_guest_id_minted_once_and_reused() {
        let slots = Arc::new(MemorySlots::default());
        let identity = IdentityProvider::new(slots.clone());

        let first = identity.resolve(None).unwrap();
        assert!(first.starts_with("guest-"));
        assert_eq!(first.len(), "guest-".len() + 8);

        assert_eq!(identity.resolve(None).unwrap(), first);
        assert_eq!(identity.resolve(Some("")).unwrap(), first);
        assert_eq!(slots.read(GUEST_ID_SLOT).unwrap(), Some(first.clone()));

        // A fresh provider over the same slots sees the same guest
        let again = IdentityProvider::new(slots);
        assert_eq!(again.resolve(None).unwrap(), first);
    }

    #[test]
    fn test_unreadable_guest_slot_mints_fresh_id() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(GUEST_ID_SLOT), [0xff, 0xfe, 0x80]).unwrap();
        let slots = Arc::new(FileSlots::open(dir.path()).unwrap());
        let identity = IdentityProvider::new(slots.clone());

        let guest = identity.resolve(None).unwrap();
        assert!(guest.starts_with("guest-"));
        assert_eq!(slots.read(GUEST_ID_SLOT).unwrap(), Some(guest.clone()));
        assert_eq!(identity.resolve(None).unwrap(), guest);
    }

    #[test]
    fn test_wallet_does_not_mint_guest() {
        let slots = Arc::new(MemorySlots::default());
        let identity = IdentityProvider::new(slots.clone());
        identity.resolve(Some("wallet-1")).unwrap();
        assert_eq!(slots.read(GUEST_ID_SLOT).unwrap(), None);
    }
}
