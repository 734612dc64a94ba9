//! VIP unlock

use crate::storage::{self, SharedStore, keys};

/// Cumulative spend that unlocks the VIP menu
pub const VIP_THRESHOLD: f64 = 1000.0;

#[derive(Clone)]
pub struct VipStatus {
    store: SharedStore,
}

impl VipStatus {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn is_vip(&self) -> bool {
        storage::load_or_default(self.store.as_ref(), keys::VIP_STATUS)
    }

    /// Report the guest's cumulative spend.
    ///
    /// Returns `true` only on the call that unlocks VIP.
    pub fn record_spend(&self, total_spent: f64) -> bool {
        if total_spent < VIP_THRESHOLD || self.is_vip() {
            return false;
        }

        storage::save(self.store.as_ref(), keys::VIP_STATUS, &true);
        tracing::info!(total_spent, "VIP menu unlocked");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_unlocks_once_at_threshold() {
        let vip = VipStatus::new(Arc::new(MemoryStore::new()));
        assert!(!vip.is_vip());

        assert!(!vip.record_spend(999.99));
        assert!(!vip.is_vip());

        assert!(vip.record_spend(1000.0));
        assert!(vip.is_vip());

        assert!(!vip.record_spend(2500.0));
        assert!(vip.is_vip());
    }

    #[test]
    fn test_flag_is_persisted() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        VipStatus::new(store.clone()).record_spend(1200.0);

        assert!(VipStatus::new(store).is_vip());
    }
}
