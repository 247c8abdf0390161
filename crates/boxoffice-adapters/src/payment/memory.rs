//! In-memory payment ledger for testing.

use std::sync::{Arc, RwLock};

use boxoffice_core::{
    application::{ApplicationError, ports::PaymentProcessor},
    domain::AccountId,
    error::BoxOfficeResult,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

/// One accepted charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub account: AccountId,
    pub amount: u64,
    pub recorded_at: DateTime<Utc>,
}

/// Recording payment adapter.
///
/// Clones share the same ledger, so a test can hand one clone to the
/// service and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentLedger {
    inner: Arc<RwLock<LedgerInner>>,
}

#[derive(Debug, Default)]
struct LedgerInner {
    records: Vec<PaymentRecord>,
    decline_reason: Option<String>,
}

impl InMemoryPaymentLedger {
    /// Create a new empty ledger that accepts every charge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger that declines every charge with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let ledger = Self::new();
        if let Ok(mut inner) = ledger.inner.write() {
            inner.decline_reason = Some(reason.into());
        }
        ledger
    }

    /// All accepted charges, oldest first.
    pub fn records(&self) -> Vec<PaymentRecord> {
        self.inner
            .read()
            .map(|inner| inner.records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of every accepted charge.
    pub fn total_charged(&self) -> u64 {
        self.records().iter().map(|record| record.amount).sum()
    }

    /// Clear all records.
    pub fn clear(&self) -> BoxOfficeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LedgerLockError)?;
        inner.records.clear();
        Ok(())
    }
}

impl PaymentProcessor for InMemoryPaymentLedger {
    fn make_payment(&self, account: AccountId, amount: u64) -> BoxOfficeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LedgerLockError)?;

        if let Some(reason) = &inner.decline_reason {
            warn!(account_id = account.get(), amount, %reason, "Payment declined");
            return Err(ApplicationError::PaymentDeclined {
                account,
                reason: reason.clone(),
            }
            .into());
        }

        let record = PaymentRecord {
            id: Uuid::new_v4(),
            account,
            amount,
            recorded_at: Utc::now(),
        };
        info!(account_id = account.get(), amount, payment_id = %record.id, "Payment recorded");
        inner.records.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(raw: i64) -> AccountId {
        AccountId::parse(raw).unwrap()
    }

    #[test]
    fn records_each_charge() {
        let ledger = InMemoryPaymentLedger::new();
        ledger.make_payment(account(2), 170).unwrap();
        ledger.make_payment(account(3), 25).unwrap();

        let records = ledger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].account, account(2));
        assert_eq!(records[0].amount, 170);
        assert_ne!(records[0].id, records[1].id);
        assert_eq!(ledger.total_charged(), 195);
    }

    #[test]
    fn clones_share_the_ledger() {
        let ledger = InMemoryPaymentLedger::new();
        let handle = ledger.clone();
        ledger.make_payment(account(1), 25).unwrap();
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn failing_ledger_declines_and_records_nothing() {
        let ledger = InMemoryPaymentLedger::failing("card expired");
        let err = ledger.make_payment(account(4), 50).unwrap_err();

        assert!(err.to_string().contains("card expired"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn clear_empties_the_ledger() {
        let ledger = InMemoryPaymentLedger::new();
        ledger.make_payment(account(1), 25).unwrap();
        ledger.clear().unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_charged(), 0);
    }

    #[test]
    fn records_serialize() {
        let ledger = InMemoryPaymentLedger::new();
        ledger.make_payment(account(5), 40).unwrap();
        let json = serde_json::to_value(&ledger.records()[0]).unwrap();
        assert_eq!(json["account"], 5);
        assert_eq!(json["amount"], 40);
    }
}
