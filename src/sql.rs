//! Database text column mapping for [`Value`].
//!
//! Values are stored in their canonical text form, e.g. `"12.34 ISO4217-EUR"`,
//! so any driver with a string column can hold them. With the `sqlite`
//! feature, [`Value`] implements `rusqlite`'s `ToSql` and `FromSql`.

use crate::error::Result;
use crate::registry::{currencies, CurrencyRegistry};
use crate::value::Value;

impl Value {
    /// The string written into a database column.
    pub fn to_sql_text(&self) -> String {
        self.to_string()
    }

    /// Reads a database column, resolving the currency through the default
    /// registry.
    pub fn from_sql_text(text: &str) -> Result<Value> {
        Self::from_sql_text_in(text, currencies())
    }

    pub fn from_sql_text_in(text: &str, registry: &CurrencyRegistry) -> Result<Value> {
        Value::parse_in(text, registry)
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use crate::error::MoneyError;
    use crate::value::Value;
    use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

    impl ToSql for Value {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(ToSqlOutput::from(self.to_sql_text()))
        }
    }

    impl FromSql for Value {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            let text = match value {
                ValueRef::Text(bytes) => {
                    std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))?
                }
                ValueRef::Integer(_) => return Err(incompatible("INTEGER")),
                ValueRef::Real(_) => return Err(incompatible("REAL")),
                ValueRef::Blob(_) => return Err(incompatible("BLOB")),
                ValueRef::Null => return Err(incompatible("NULL")),
            };

            Value::from_sql_text(text).map_err(|e| FromSqlError::Other(Box::new(e)))
        }
    }

    fn incompatible(kind: &'static str) -> FromSqlError {
        FromSqlError::Other(Box::new(MoneyError::IncompatibleDbType(kind)))
    }
}
