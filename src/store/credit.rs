use std::collections::HashMap;
use std::sync::RwLock;

use crate::config;

use super::StoreError;

/// Per-user credit balances. Users the ledger has never seen have an
/// implicit balance of zero.
pub trait CreditLedger: Send + Sync {
    fn balance(&self, user_id: &str) -> Result<i64, StoreError>;

    /// Check and deduct under a single lock. On insufficient balance
    /// the ledger is left untouched. Returns the remaining balance.
    fn debit(&self, user_id: &str, amount: i64) -> Result<i64, StoreError>;

    /// Deduct without a balance check. Balances may go negative and
    /// saturate at the i64 extremes. Returns the remaining balance.
    fn charge(&self, user_id: &str, amount: i64) -> Result<i64, StoreError>;

    /// Add credits, saturating at the i64 ceiling. Returns the new
    /// balance.
    fn grant(&self, user_id: &str, amount: i64) -> Result<i64, StoreError>;
}

/// In-memory credit ledger backed by RwLock.
pub struct MemoryCreditLedger {
    balances: RwLock<HashMap<String, i64>>,
}

impl MemoryCreditLedger {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }

    /// Ledger with the demo account pre-funded.
    pub fn with_demo_user() -> Self {
        let mut balances = HashMap::new();
        balances.insert(
            config::DEMO_USER.to_string(),
            config::DEMO_STARTING_CREDITS,
        );
        Self {
            balances: RwLock::new(balances),
        }
    }
}

impl CreditLedger for MemoryCreditLedger {
    fn balance(&self, user_id: &str) -> Result<i64, StoreError> {
        let balances = self.balances.read().map_err(|_| StoreError::LockFailed)?;
        Ok(balances.get(user_id).copied().unwrap_or(0))
    }

    fn debit(&self, user_id: &str, amount: i64) -> Result<i64, StoreError> {
        let mut balances = self.balances.write().map_err(|_| StoreError::LockFailed)?;
        // Read without inserting: a rejected debit must not grow the map.
        let balance = balances.get(user_id).copied().unwrap_or(0);

        if balance < amount {
            return Err(StoreError::InsufficientCredits {
                user: user_id.to_string(),
                balance,
                required: amount,
            });
        }

        let remaining = balance.saturating_sub(amount);
        balances.insert(user_id.to_string(), remaining);
        tracing::debug!(user_id, amount, remaining, "Debited credits");
        Ok(remaining)
    }

    fn charge(&self, user_id: &str, amount: i64) -> Result<i64, StoreError> {
        let mut balances = self.balances.write().map_err(|_| StoreError::LockFailed)?;
        let balance = balances.entry(user_id.to_string()).or_insert(0);
        *balance = balance.saturating_sub(amount);
        Ok(*balance)
    }

    fn grant(&self, user_id: &str, amount: i64) -> Result<i64, StoreError> {
        let mut balances = self.balances.write().map_err(|_| StoreError::LockFailed)?;
        let balance = balances.entry(user_id.to_string()).or_insert(0);
        *balance = balance.saturating_add(amount);
        Ok(*balance)
    }
}

impl Default for MemoryCreditLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn demo_user_starts_funded() {
        let ledger = MemoryCreditLedger::with_demo_user();
        assert_eq!(
            ledger.balance(config::DEMO_USER).unwrap(),
            config::DEMO_STARTING_CREDITS
        );
    }

    #[test]
    fn unseen_user_has_zero_balance() {
        let ledger = MemoryCreditLedger::new();
        assert_eq!(ledger.balance("nobody").unwrap(), 0);
    }

    #[test]
    fn debit_deducts_and_returns_remaining() {
        let ledger = MemoryCreditLedger::with_demo_user();
        let remaining = ledger.debit(config::DEMO_USER, 3).unwrap();
        assert_eq!(remaining, 7);
        assert_eq!(ledger.balance(config::DEMO_USER).unwrap(), 7);
    }

    #[test]
    fn insufficient_debit_leaves_balance_untouched() {
        let ledger = MemoryCreditLedger::with_demo_user();
        let result = ledger.debit(config::DEMO_USER, 11);

        match result.unwrap_err() {
            StoreError::InsufficientCredits {
                user,
                balance,
                required,
            } => {
                assert_eq!(user, config::DEMO_USER);
                assert_eq!(balance, 10);
                assert_eq!(required, 11);
            }
            other => panic!("Expected InsufficientCredits, got: {:?}", other),
        }
        assert_eq!(ledger.balance(config::DEMO_USER).unwrap(), 10);
    }

    #[test]
    fn debit_on_unseen_user_fails_for_positive_amount() {
        let ledger = MemoryCreditLedger::new();
        assert!(ledger.debit("nobody", 1).is_err());
        assert_eq!(ledger.balance("nobody").unwrap(), 0);
    }

    #[test]
    fn rejected_debit_leaves_no_entry_behind() {
        let ledger = MemoryCreditLedger::new();
        assert!(ledger.debit("passer-by", 1).is_err());

        let balances = ledger.balances.read().unwrap();
        assert!(!balances.contains_key("passer-by"));
    }

    #[test]
    fn zero_debit_always_succeeds() {
        let ledger = MemoryCreditLedger::new();
        assert_eq!(ledger.debit("nobody", 0).unwrap(), 0);
    }

    #[test]
    fn charge_can_take_balance_negative() {
        let ledger = MemoryCreditLedger::new();
        assert_eq!(ledger.charge("overdrawn", 5).unwrap(), -5);
        assert_eq!(ledger.balance("overdrawn").unwrap(), -5);
    }

    #[test]
    fn charge_saturates_at_the_integer_extremes() {
        let ledger = MemoryCreditLedger::new();

        // 0 - i64::MIN has no i64 representation; the balance pins to
        // the ceiling.
        assert_eq!(ledger.charge("mint", i64::MIN).unwrap(), i64::MAX);

        ledger.charge("drain", i64::MAX).unwrap();
        assert_eq!(ledger.charge("drain", i64::MAX).unwrap(), i64::MIN);
    }

    #[test]
    fn grant_adds_credits() {
        let ledger = MemoryCreditLedger::new();
        assert_eq!(ledger.grant("new-user", 4).unwrap(), 4);
        assert_eq!(ledger.grant("new-user", 2).unwrap(), 6);
    }

    #[test]
    fn grant_saturates_at_the_ceiling() {
        let ledger = MemoryCreditLedger::new();
        assert_eq!(ledger.grant("hoard", i64::MAX).unwrap(), i64::MAX);
        assert_eq!(ledger.grant("hoard", 1).unwrap(), i64::MAX);
    }

    #[test]
    fn concurrent_debits_never_overspend() {
        let ledger = Arc::new(MemoryCreditLedger::with_demo_user());

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || ledger.debit(config::DEMO_USER, 1).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 10);
        assert_eq!(ledger.balance(config::DEMO_USER).unwrap(), 0);
    }
}
