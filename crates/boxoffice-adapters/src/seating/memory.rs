//! In-memory seat book for testing.

use std::sync::{Arc, RwLock};

use boxoffice_core::{
    application::{ApplicationError, ports::SeatAllocator},
    domain::AccountId,
    error::BoxOfficeResult,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

/// One accepted reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationRecord {
    pub id: Uuid,
    pub account: AccountId,
    pub seats: u32,
    pub recorded_at: DateTime<Utc>,
}

/// Recording seat reservation adapter. Clones share the same book.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatBook {
    inner: Arc<RwLock<SeatBookInner>>,
}

#[derive(Debug, Default)]
struct SeatBookInner {
    records: Vec<ReservationRecord>,
    failure_reason: Option<String>,
}

impl InMemorySeatBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a seat book that refuses every reservation with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let book = Self::new();
        if let Ok(mut inner) = book.inner.write() {
            inner.failure_reason = Some(reason.into());
        }
        book
    }

    pub fn records(&self) -> Vec<ReservationRecord> {
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

    pub fn total_reserved(&self) -> u64 {
        self.records()
            .iter()
            .map(|record| u64::from(record.seats))
            .sum()
    }

    pub fn clear(&self) -> BoxOfficeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LedgerLockError)?;
        inner.records.clear();
        Ok(())
    }
}

impl SeatAllocator for InMemorySeatBook {
    fn reserve_seats(&self, account: AccountId, seats: u32) -> BoxOfficeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LedgerLockError)?;

        if let Some(reason) = &inner.failure_reason {
            warn!(account_id = account.get(), seats, %reason, "Reservation refused");
            return Err(ApplicationError::ReservationFailed {
                account,
                reason: reason.clone(),
            }
            .into());
        }

        let record = ReservationRecord {
            id: Uuid::new_v4(),
            account,
            seats,
            recorded_at: Utc::now(),
        };
        info!(
            account_id = account.get(),
            seats,
            reservation_id = %record.id,
            "Reservation recorded"
        );
        inner.records.push(record);
        Ok(())
    }
}
