//! Thread-safe currency registry.
//!
//! A registry keeps every currency reachable by its unique ID, its unique
//! code and, when locked to a single standard, its plain code. Decoders use
//! the registry to turn identifiers back into live currencies.
//!
//! # Invariants
//!
//! - Every identifier in every index maps back to the currency it was
//!   registered with.
//! - Adding a currency that is already registered is a no-op.
//! - A currency colliding with a different registered currency is rejected
//!   and leaves the registry untouched.

use crate::currency::{validate_currency, CurrencyRef};
use crate::error::{Identifier, MoneyError, Result};
use crate::iso4217;
use log::debug;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Name of the process-wide default registry.
pub const DEFAULT_REGISTRY_NAME: &str = "money-split-currencies";

static DEFAULT_REGISTRY: Lazy<CurrencyRegistry> = Lazy::new(|| {
    CurrencyRegistry::must_with_currencies(
        DEFAULT_REGISTRY_NAME,
        None,
        iso4217::table().iter().cloned(),
    )
});

/// The process-wide default registry.
///
/// Seeded with the ISO 4217 table on first access. Register custom currencies
/// with [`CurrencyRegistry::add`] to make them resolvable by the decoders that
/// don't take an explicit registry.
pub fn currencies() -> &'static CurrencyRegistry {
    &DEFAULT_REGISTRY
}

#[derive(Default)]
struct RegistryIndex {
    /// Insertion order.
    all: Vec<CurrencyRef>,
    by_unique_id: HashMap<i32, CurrencyRef>,
    by_unique_code: HashMap<String, CurrencyRef>,
    /// Only present in registries locked to a single standard.
    by_code: Option<HashMap<String, CurrencyRef>>,
}

/// A named container of currencies with indexed lookups.
pub struct CurrencyRegistry {
    name: String,
    standard: Option<String>,
    index: RwLock<RegistryIndex>,
}

/// Only the very same shared instance counts as already registered.
fn is_same(a: &CurrencyRef, b: &CurrencyRef) -> bool {
    Arc::ptr_eq(a, b)
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    ///
    /// With `standard` set, only currencies of that standard are accepted and
    /// lookups by plain code become available.
    pub fn new(name: impl Into<String>, standard: Option<&str>) -> Self {
        let index = RegistryIndex {
            by_code: standard.map(|_| HashMap::new()),
            ..RegistryIndex::default()
        };

        CurrencyRegistry {
            name: name.into(),
            standard: standard.map(str::to_string),
            index: RwLock::new(index),
        }
    }

    /// Creates a registry and adds the given currencies.
    pub fn with_currencies<I>(
        name: impl Into<String>,
        standard: Option<&str>,
        currencies: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = CurrencyRef>,
    {
        let registry = Self::new(name, standard);
        registry.add(currencies)?;
        Ok(registry)
    }

    /// Like [`CurrencyRegistry::with_currencies`].
    ///
    /// # Panics
    ///
    /// Panics if any currency is invalid or collides with another one.
    pub fn must_with_currencies<I>(
        name: impl Into<String>,
        standard: Option<&str>,
        currencies: I,
    ) -> Self
    where
        I: IntoIterator<Item = CurrencyRef>,
    {
        let name = name.into();
        match Self::with_currencies(name.clone(), standard, currencies) {
            Ok(registry) => registry,
            Err(e) => panic!("failed to create currency registry {name:?}: {e}"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The standard this registry is locked to, if any.
    pub fn standard(&self) -> Option<&str> {
        self.standard.as_deref()
    }

    /// Adds one or more currencies.
    ///
    /// Each currency is committed on its own: when a currency fails, the ones
    /// before it in the same call stay registered and the failing one leaves
    /// no trace.
    pub fn add<I>(&self, currencies: I) -> Result<()>
    where
        I: IntoIterator<Item = CurrencyRef>,
    {
        let mut index = self.index.write();
        for currency in currencies {
            self.add_locked(&mut index, currency)?;
        }
        Ok(())
    }

    /// Adds a single currency.
    pub fn register(&self, currency: CurrencyRef) -> Result<()> {
        self.add(std::iter::once(currency))
    }

    fn add_locked(&self, index: &mut RegistryIndex, currency: CurrencyRef) -> Result<()> {
        validate_currency(currency.as_ref())?;

        let (unique_id, unique_code, code) = (
            currency.unique_id(),
            currency.unique_code(),
            currency.code().to_string(),
        );

        if let Some(allowed) = &self.standard {
            if currency.standard() != allowed {
                return Err(MoneyError::StandardNotAllowed {
                    currency: unique_code,
                    standard: currency.standard().to_string(),
                    allowed: allowed.clone(),
                });
            }
        }

        let candidates = [
            (Identifier::UniqueId, index.by_unique_id.get(&unique_id)),
            (Identifier::UniqueCode, index.by_unique_code.get(&unique_code)),
            (
                Identifier::Code,
                index.by_code.as_ref().and_then(|m| m.get(&code)),
            ),
        ];

        let mut duplicate = false;
        for (identifier, existing) in candidates {
            let Some(existing) = existing else { continue };
            if !is_same(existing, &currency) {
                return Err(MoneyError::Collision {
                    currency: unique_code,
                    identifier,
                    existing: existing.unique_code(),
                });
            }
            duplicate = true;
        }

        if duplicate {
            debug!(
                "Registry {:?}: {} already registered, skipping",
                self.name, unique_code
            );
            return Ok(());
        }

        index.all.push(Arc::clone(&currency));
        index.by_unique_id.insert(unique_id, Arc::clone(&currency));
        if let Some(by_code) = index.by_code.as_mut() {
            by_code.insert(code, Arc::clone(&currency));
        }
        debug!("Registry {:?}: registered {}", self.name, unique_code);
        index.by_unique_code.insert(unique_code, currency);

        Ok(())
    }

    /// Finds a currency by its unique ID (e.g. `42170978`).
    pub fn by_unique_id(&self, unique_id: i32) -> Option<CurrencyRef> {
        self.index.read().by_unique_id.get(&unique_id).cloned()
    }

    /// Finds a currency by its unique code (e.g. `"ISO4217-EUR"`).
    pub fn by_unique_code(&self, unique_code: &str) -> Option<CurrencyRef> {
        self.index.read().by_unique_code.get(unique_code).cloned()
    }

    /// Finds a currency by its plain code (e.g. `"EUR"`).
    ///
    /// Always `None` for registries that accept several standards, as plain
    /// codes are ambiguous there.
    pub fn by_code(&self, code: &str) -> Option<CurrencyRef> {
        self.index
            .read()
            .by_code
            .as_ref()
            .and_then(|m| m.get(code).cloned())
    }

    /// Like [`CurrencyRegistry::by_unique_code`], but failing if not found.
    pub fn resolve_unique_code(&self, unique_code: &str) -> Result<CurrencyRef> {
        self.by_unique_code(unique_code)
            .ok_or_else(|| MoneyError::UnknownUniqueCode(unique_code.to_string()))
    }

    /// Like [`CurrencyRegistry::by_unique_id`], but failing if not found.
    pub fn resolve_unique_id(&self, unique_id: i32) -> Result<CurrencyRef> {
        self.by_unique_id(unique_id)
            .ok_or(MoneyError::UnknownUniqueId(unique_id))
    }

    /// All registered currencies in insertion order.
    pub fn all(&self) -> Vec<CurrencyRef> {
        self.index.read().all.clone()
    }

    pub fn len(&self) -> usize {
        self.index.read().all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.read().all.is_empty()
    }
}

impl std::fmt::Debug for CurrencyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyRegistry")
            .field("name", &self.name)
            .field("standard", &self.standard)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::tests::TestCurrency;
    use rust_decimal_macros::dec;

    fn unique_codes(registry: &CurrencyRegistry) -> Vec<String> {
        registry.all().iter().map(|c| c.unique_code()).collect()
    }

    #[test]
    fn test_add_and_lookup() {
        let registry = CurrencyRegistry::new("test", None);
        let bar = TestCurrency::new("FOO", "BAR", -1).shared();
        registry.register(Arc::clone(&bar)).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&registry.by_unique_id(-1).unwrap(), &bar));
        assert!(Arc::ptr_eq(&registry.by_unique_code("FOO-BAR").unwrap(), &bar));
        assert!(registry.by_unique_code("FOO-BAZ").is_none());
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let registry = CurrencyRegistry::new("test", None);
        let bar = TestCurrency::new("FOO", "BAR", -1).shared();

        registry.register(Arc::clone(&bar)).unwrap();
        registry.register(Arc::clone(&bar)).unwrap();
        registry
            .add(vec![Arc::clone(&bar), Arc::clone(&bar)])
            .unwrap();

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unique_id_collision_leaves_registry_unchanged() {
        let registry = CurrencyRegistry::new("test", None);
        registry
            .register(TestCurrency::new("FOO", "BAR", -1).shared())
            .unwrap();

        let err = registry
            .register(TestCurrency::new("FOO", "BAZ", -1).shared())
            .unwrap_err();
        assert!(matches!(
            err,
            MoneyError::Collision {
                identifier: Identifier::UniqueId,
                ..
            }
        ));

        assert_eq!(unique_codes(&registry), vec!["FOO-BAR"]);
        assert!(registry.by_unique_code("FOO-BAZ").is_none());
    }

    #[test]
    fn test_redefinition_with_same_identifiers_is_rejected() {
        let registry = CurrencyRegistry::new("test", None);
        registry
            .register(TestCurrency::new("FOO", "BAR", -1).shared())
            .unwrap();

        let mut redefined = TestCurrency::new("FOO", "BAR", -1);
        redefined.smallest_unit = Some(dec!(0.5));
        let err = registry.register(redefined.shared()).unwrap_err();
        assert!(matches!(
            err,
            MoneyError::Collision {
                identifier: Identifier::UniqueId,
                ..
            }
        ));

        assert_eq!(registry.len(), 1);
        let kept = registry.by_unique_code("FOO-BAR").unwrap();
        assert_eq!(kept.smallest_unit(), Some(dec!(0.01)));
    }

    #[test]
    fn test_unique_code_collision() {
        let registry = CurrencyRegistry::new("test", None);
        registry
            .register(TestCurrency::new("FOO", "BAR", -1).shared())
            .unwrap();

        let err = registry
            .register(TestCurrency::new("FOO", "BAR", -2).shared())
            .unwrap_err();
        assert!(matches!(
            err,
            MoneyError::Collision {
                identifier: Identifier::UniqueCode,
                ..
            }
        ));
        assert!(registry.by_unique_id(-2).is_none());
    }

    #[test]
    fn test_code_collision_only_in_locked_registry() {
        let open = CurrencyRegistry::new("open", None);
        open.add(vec![
            TestCurrency::new("FOO", "BAR", -1).shared(),
            TestCurrency::new("BAZ", "BAR", -2).shared(),
        ])
        .unwrap();
        assert_eq!(open.len(), 2);
        assert!(open.by_code("BAR").is_none());

        let locked = CurrencyRegistry::new("locked", Some("FOO"));
        locked
            .register(TestCurrency::new("FOO", "BAR", -1).shared())
            .unwrap();
        assert_eq!(locked.by_code("BAR").unwrap().unique_id(), -1);

        let mut twin = TestCurrency::new("FOO", "BAR", -3);
        twin.unique_code = Some("FOO-BAR2");
        // Rejected by validation before any index is consulted.
        assert!(matches!(
            locked.register(twin.shared()),
            Err(MoneyError::InvalidCurrency { .. })
        ));
        assert_eq!(locked.len(), 1);
    }

    #[test]
    fn test_standard_lock() {
        let registry = CurrencyRegistry::new("locked", Some("FOO"));
        let err = registry
            .register(TestCurrency::new("BAZ", "BAR", -1).shared())
            .unwrap_err();
        assert!(matches!(err, MoneyError::StandardNotAllowed { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_currency_rejected() {
        let registry = CurrencyRegistry::new("test", None);
        assert!(registry
            .register(TestCurrency::new("FOO", "BAR", 0).shared())
            .is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_batch_commits_currencies_before_failure() {
        let registry = CurrencyRegistry::new("test", None);
        let result = registry.add(vec![
            TestCurrency::new("FOO", "BAR", -1).shared(),
            TestCurrency::new("FOO", "BAZ", -1).shared(),
            TestCurrency::new("FOO", "QUX", -3).shared(),
        ]);

        assert!(result.is_err());
        assert_eq!(unique_codes(&registry), vec!["FOO-BAR"]);
    }

    #[test]
    fn test_all_keeps_insertion_order() {
        let registry = CurrencyRegistry::new("test", None);
        registry
            .add(vec![
                TestCurrency::new("FOO", "C", -3).shared(),
                TestCurrency::new("FOO", "A", -1).shared(),
                TestCurrency::new("FOO", "B", -2).shared(),
            ])
            .unwrap();

        assert_eq!(unique_codes(&registry), vec!["FOO-C", "FOO-A", "FOO-B"]);
    }

    #[test]
    fn test_must_with_currencies_panics_on_collision() {
        let result = std::panic::catch_unwind(|| {
            CurrencyRegistry::must_with_currencies(
                "broken",
                None,
                vec![
                    TestCurrency::new("FOO", "BAR", -1).shared(),
                    TestCurrency::new("FOO", "BAZ", -1).shared(),
                ],
            )
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_concurrent_adds_and_reads() {
        let registry = CurrencyRegistry::new("test", None);
        let codes: Vec<String> = (1..=64).map(|i| format!("C{i}")).collect();

        std::thread::scope(|s| {
            for (i, code) in codes.iter().enumerate() {
                let registry = &registry;
                s.spawn(move || {
                    let code: &'static str = Box::leak(code.clone().into_boxed_str());
                    let currency = TestCurrency::new("FOO", code, -(i as i32) - 1).shared();
                    registry.register(Arc::clone(&currency)).unwrap();
                    registry.register(currency).unwrap();
                    assert!(registry.by_unique_id(-(i as i32) - 1).is_some());
                });
            }
        });

        assert_eq!(registry.len(), 64);
        for currency in registry.all() {
            let by_id = registry.by_unique_id(currency.unique_id()).unwrap();
            let by_code = registry.by_unique_code(&currency.unique_code()).unwrap();
            assert!(Arc::ptr_eq(&by_id, &currency));
            assert!(Arc::ptr_eq(&by_code, &currency));
        }
    }

    #[test]
    fn test_default_registry_contains_iso_table() {
        let eur = currencies().by_unique_code("ISO4217-EUR").unwrap();
        assert_eq!(eur.code(), "EUR");
        assert!(currencies().by_code("EUR").is_none());
        assert!(currencies().len() >= iso4217::table().len());
    }
}
