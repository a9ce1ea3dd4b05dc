//! # Money Split
//!
//! Monetary values with exact decimal amounts, a registry of uniquely
//! identified currencies, and a split algorithm that never loses a cent.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: amounts are `rust_decimal::Decimal`, never floats
//! - **Currency safety**: every binary operation checks both currencies
//! - **Unique identities**: a registry rejects any currency whose unique ID,
//!   unique code or code collides with another one
//! - **Lossless codecs**: text, JSON, binary and database forms round-trip
//!
//! ## Example
//!
//! ```
//! use money_split::Value;
//!
//! let bill = Value::parse("-11.11 ISO4217-EUR").unwrap();
//! let parts = bill.split(3).unwrap();
//! assert_eq!(parts[0].to_string(), "-3.71 ISO4217-EUR");
//! assert_eq!(parts[1].to_string(), "-3.70 ISO4217-EUR");
//!
//! let total = money_split::sum(&parts[0], &parts[1..]).unwrap();
//! assert_eq!(total, bill);
//! ```

pub mod batch;
pub mod codec;
pub mod currency;
pub mod error;
pub mod iso4217;
pub mod math;
pub mod registry;
pub mod split;
pub mod sql;
pub mod value;

pub use batch::{SplitBatch, SplitRecord, SplitResult};
pub use currency::{same_currency, validate_currency, Currency, CurrencyRef};
pub use error::{Identifier, MoneyError, Result};
pub use iso4217::Iso4217Currency;
pub use math::{must_sum, sum};
pub use registry::{currencies, CurrencyRegistry};
pub use split::unit_for_decimals;
pub use value::Value;
