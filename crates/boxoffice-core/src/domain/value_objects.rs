//! Domain value objects: TicketType, AccountId.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Prices live in `policy.rs`; this file only defines the types, their
//! string representations, and their `FromStr` parsers.

use crate::domain::error::{DomainError, PurchaseRejection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TicketType ───────────────────────────────────────────────────────────────

/// A fare category.
///
/// The business rules are exhaustive over exactly these three variants, so
/// the enum is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// Every ticket type, in declaration order.
    pub const ALL: [TicketType; 3] = [Self::Adult, Self::Child, Self::Infant];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    /// Whether a ticket of this type takes a reservable seat.
    ///
    /// Infants sit on an adult's lap.
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }

    /// Whether this type may only be bought alongside an adult ticket.
    pub const fn requires_adult(self) -> bool {
        matches!(self, Self::Child | Self::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adult" | "adults" => Ok(Self::Adult),
            "child" | "children" | "kid" => Ok(Self::Child),
            "infant" | "infants" | "baby" => Ok(Self::Infant),
            other => Err(DomainError::UnknownTicketType(other.to_string())),
        }
    }
}

// ── AccountId ────────────────────────────────────────────────────────────────

/// A purchaser's account identifier, known to be strictly positive.
///
/// The only way to obtain one is [`AccountId::parse`], so the collaborators
/// never see an id that failed the account check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Validate a raw account id.
    pub fn parse(raw: i64) -> Result<Self, PurchaseRejection> {
        if raw <= 0 {
            return Err(PurchaseRejection::InvalidAccount);
        }
        Ok(Self(raw))
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
