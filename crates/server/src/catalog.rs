//! Static store catalog.
//!
//! The catalog is a read-only, process-wide table of stores and their
//! products, initialized once at startup. It is never mutated at runtime;
//! order creation only reads it to validate requested items.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OrderItem;

/// Policy for deciding whether a requested item matches a catalog product.
///
/// Full structural equality is the historical behavior, but it rejects an
/// otherwise-known product whose price has drifted since the client cached
/// it. The policy is configurable rather than guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductMatch {
    /// Name, unit, and price must all match.
    #[default]
    Exact,
    /// Name and unit identify the product; price drift is tolerated.
    NameUnit,
}

/// Error parsing a [`ProductMatch`] from a string.
#[derive(Debug, thiserror::Error)]
#[error("unknown product match policy: {0} (expected \"exact\" or \"name-unit\")")]
pub struct ProductMatchParseError(String);

impl std::str::FromStr for ProductMatch {
    type Err = ProductMatchParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "name-unit" => Ok(Self::NameUnit),
            other => Err(ProductMatchParseError(other.to_owned())),
        }
    }
}

/// A product listed in a store's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product name.
    pub name: String,
    /// Unit the product is sold in.
    pub unit: String,
    /// Listed unit price.
    pub price: Decimal,
}

/// A named store and its product list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    /// Store name (unique within the catalog).
    pub name: String,
    /// Products this store carries.
    pub products: Vec<Product>,
}

impl Store {
    /// Return the requested items NOT found in this store's product list.
    ///
    /// The ordered quantity is stripped before comparison; only the product
    /// fields participate. An empty result means every item is valid.
    #[must_use]
    pub fn unmatched_items(&self, items: &[OrderItem], policy: ProductMatch) -> Vec<Product> {
        items
            .iter()
            .filter(|item| !self.carries(item, policy))
            .map(|item| Product {
                name: item.name.clone(),
                unit: item.unit.clone(),
                price: item.price,
            })
            .collect()
    }

    fn carries(&self, item: &OrderItem, policy: ProductMatch) -> bool {
        self.products.iter().any(|p| match policy {
            ProductMatch::Exact => {
                p.name == item.name && p.unit == item.unit && p.price == item.price
            }
            ProductMatch::NameUnit => p.name == item.name && p.unit == item.unit,
        })
    }
}

/// Error loading a catalog from disk.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog file is not valid JSON of the expected shape.
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The static product catalog, plus the configured match policy.
#[derive(Debug, Clone)]
pub struct Catalog {
    stores: Vec<Store>,
    policy: ProductMatch,
}

impl Catalog {
    /// Build a catalog from an explicit store list.
    #[must_use]
    pub const fn new(stores: Vec<Store>, policy: ProductMatch) -> Self {
        Self { stores, policy }
    }

    /// Load a catalog from a JSON file containing an array of stores.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path, policy: ProductMatch) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let stores: Vec<Store> = serde_json::from_str(&raw)?;
        Ok(Self::new(stores, policy))
    }

    /// The catalog shipped with the server, used when no file is configured.
    #[must_use]
    pub fn builtin(policy: ProductMatch) -> Self {
        let product = |name: &str, unit: &str, cents: i64| Product {
            name: name.to_owned(),
            unit: unit.to_owned(),
            price: Decimal::new(cents, 2),
        };
        Self::new(
            vec![
                Store {
                    name: "Downtown".to_owned(),
                    products: vec![
                        product("Bread", "loaf", 250),
                        product("Eggs", "dozen", 420),
                        product("Butter", "pack", 310),
                        product("Apples", "kg", 199),
                    ],
                },
                Store {
                    name: "Riverside".to_owned(),
                    products: vec![
                        product("Milk", "liter", 100),
                        product("Cheese", "wheel", 1250),
                        product("Honey", "jar", 675),
                    ],
                },
            ],
            policy,
        )
    }

    /// Find a store by exact name match.
    #[must_use]
    pub fn store(&self, name: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.name == name)
    }

    /// The configured product match policy.
    #[must_use]
    pub const fn policy(&self) -> ProductMatch {
        self.policy
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(name: &str, unit: &str, price: Decimal, amount: u32) -> OrderItem {
        OrderItem {
            name: name.to_owned(),
            unit: unit.to_owned(),
            price,
            amount,
        }
    }

    fn downtown() -> Store {
        Store {
            name: "Downtown".to_owned(),
            products: vec![Product {
                name: "Bread".to_owned(),
                unit: "loaf".to_owned(),
                price: Decimal::new(25, 1),
            }],
        }
    }

    #[test]
    fn test_store_lookup_is_exact() {
        let catalog = Catalog::new(vec![downtown()], ProductMatch::Exact);
        assert!(catalog.store("Downtown").is_some());
        assert!(catalog.store("downtown").is_none());
        assert!(catalog.store("Uptown").is_none());
    }

    #[test]
    fn test_matching_item_is_not_reported() {
        let store = downtown();
        let unmatched =
            store.unmatched_items(&[item("Bread", "loaf", Decimal::new(25, 1), 2)], ProductMatch::Exact);
        assert!(unmatched.is_empty());
    }

    #[test]
    fn test_unknown_item_is_reported_without_amount() {
        let store = downtown();
        let unmatched =
            store.unmatched_items(&[item("Milk", "liter", Decimal::new(10, 1), 1)], ProductMatch::Exact);
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched.first().unwrap().name, "Milk");
    }

    #[test]
    fn test_exact_policy_rejects_price_drift() {
        let store = downtown();
        let drifted = item("Bread", "loaf", Decimal::new(26, 1), 1);
        assert_eq!(
            store.unmatched_items(std::slice::from_ref(&drifted), ProductMatch::Exact).len(),
            1
        );
        assert!(store
            .unmatched_items(std::slice::from_ref(&drifted), ProductMatch::NameUnit)
            .is_empty());
    }

    #[test]
    fn test_policy_parses_from_config_strings() {
        assert_eq!("exact".parse::<ProductMatch>().unwrap(), ProductMatch::Exact);
        assert_eq!(
            "name-unit".parse::<ProductMatch>().unwrap(),
            ProductMatch::NameUnit
        );
        assert!("fuzzy".parse::<ProductMatch>().is_err());
    }

    #[test]
    fn test_builtin_catalog_has_downtown_bread() {
        let catalog = Catalog::builtin(ProductMatch::default());
        let store = catalog.store("Downtown").unwrap();
        let bread = item("Bread", "loaf", Decimal::new(25, 1), 1);
        assert!(store.unmatched_items(&[bread], catalog.policy()).is_empty());
    }
}
