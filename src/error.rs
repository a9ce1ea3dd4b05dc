//! Error types for currencies, registries and monetary values.

use thiserror::Error;

/// Result type alias for monetary operations
pub type Result<T> = std::result::Result<T, MoneyError>;

/// Label used in messages when one side of an operation carries no currency.
pub const NO_CURRENCY: &str = "no currency";

/// Which of a currency's identifiers caused a registry collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier {
    UniqueId,
    UniqueCode,
    Code,
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::UniqueId => write!(f, "unique ID"),
            Identifier::UniqueCode => write!(f, "unique code"),
            Identifier::Code => write!(f, "code"),
        }
    }
}

/// Errors that can occur when defining currencies or working with values.
#[derive(Error, Debug)]
pub enum MoneyError {
    /// A currency definition violates a structural invariant
    #[error("Invalid currency {currency}: {reason}")]
    InvalidCurrency { currency: String, reason: String },

    /// A currency identifier is already taken by a different currency
    #[error("Currency {currency} has the same {identifier} as the already registered currency {existing}")]
    Collision {
        currency: String,
        identifier: Identifier,
        existing: String,
    },

    /// The registry only accepts currencies of a single standard
    #[error("Currency {currency} of standard {standard:?} not allowed in this registry, only {allowed:?}")]
    StandardNotAllowed {
        currency: String,
        standard: String,
        allowed: String,
    },

    /// Two values with incompatible currencies were combined
    #[error("The monetary values have two different currencies: {left} and {right}")]
    DifferentCurrencies { left: String, right: String },

    /// Both factors of a multiplication carry a currency
    #[error("Can't multiply two values that both carry the currency {currency}")]
    CurrencySquared { currency: String },

    /// No currency is registered under the given unique code
    #[error("Can't find currency with unique code {0:?}")]
    UnknownUniqueCode(String),

    /// No currency is registered under the given unique ID
    #[error("Can't find currency with unique ID {0}")]
    UnknownUniqueId(i32),

    /// Text input contains more than one separator
    #[error("Input string {0:?} contains too many spaces")]
    TooManySeparators(String),

    /// The amount part of an input could not be parsed
    #[error("Malformed amount {input:?}: {source}")]
    InvalidAmount {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// Binary input is shorter than the fixed layout requires
    #[error("Expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// The decimal part of a binary payload is not a valid encoding
    #[error("Malformed binary decimal encoding")]
    InvalidDecimalEncoding,

    /// A database column holds something other than text
    #[error("Incompatible database type {0}, expected text")]
    IncompatibleDbType(&'static str),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A split was requested into zero or a negative number of parts
    #[error("Can't split into {0} parts, the number of parts must be positive")]
    InvalidPartCount(i64),

    /// The split granularity is zero or negative
    #[error("Smallest unit {0} must be positive")]
    InvalidSmallestUnit(String),

    /// The value is not an exact multiple of the split granularity
    #[error("Value {value} is not a multiple of the smallest unit {unit}")]
    NotAMultiple { value: String, unit: String },

    /// The requested number of decimal places can't be represented
    #[error("Decimal places {0} out of the representable range")]
    DecimalPlacesOutOfRange(i32),

    /// The value's currency doesn't define a smallest unit
    #[error("Currency {0} has no smallest unit")]
    NoSmallestUnit(String),

    /// An intermediate result exceeds the decimal range
    #[error("Arithmetic overflow")]
    Overflow,

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: money-split <input.csv>")]
    MissingArgument,
}
