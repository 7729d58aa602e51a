//! Core Kernel - Foundational value types for FNOL claim routing
//!
//! This crate provides the building blocks shared by the decision core and
//! its outer collaborators:
//! - Money with exact decimal rendering for claim amounts
//! - Calendar date parsing for free-form extracted dates
//! - Request identifiers for log correlation

pub mod money;
pub mod temporal;
pub mod identifiers;

pub use money::{group_thousands, Money, Currency, MoneyError};
pub use temporal::{parse_calendar_date, is_calendar_date, TemporalError};
pub use identifiers::RequestId;
