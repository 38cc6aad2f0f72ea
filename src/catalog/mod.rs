//! Immutable tier catalog.
//!
//! The catalog is built once at startup and shared (usually behind an `Arc`)
//! with every engine that reads tier definitions. Tiers are grouped into
//! fixed-size pages for presentation only; the unlock chain ignores pages.

mod data;

pub use data::{TIER_BASE_RATES, TIER_NAMES};

use crate::core::constants::{COST_TO_RATE_RATIO, PAGE_SIZE};
use crate::error::CatalogError;

/// Static description of one purchasable tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierDefinition {
    pub index: usize,
    pub base_rate: f64,
    pub base_cost: f64,
    pub name: String,
}

/// Ordered list of tier definitions partitioned into pages.
#[derive(Debug, Clone, PartialEq)]
pub struct TierCatalog {
    tiers: Vec<TierDefinition>,
    page_size: usize,
}

impl TierCatalog {
    /// Builds a catalog from parallel rate/cost/name arrays.
    ///
    /// Refuses to construct when the arrays are out of lockstep, when there
    /// are no tiers, when `page_size` is zero, or when any rate or cost is not
    /// a positive finite number.
    pub fn new(
        rates: Vec<f64>,
        costs: Vec<f64>,
        names: Vec<String>,
        page_size: usize,
    ) -> Result<Self, CatalogError> {
        if rates.len() != costs.len() || rates.len() != names.len() {
            return Err(CatalogError::LengthMismatch {
                rates: rates.len(),
                costs: costs.len(),
                names: names.len(),
            });
        }
        if rates.is_empty() {
            return Err(CatalogError::Empty);
        }
        if page_size == 0 {
            return Err(CatalogError::ZeroPageSize);
        }

        let mut tiers = Vec::with_capacity(rates.len());
        for (index, ((base_rate, base_cost), name)) in
            rates.into_iter().zip(costs).zip(names).enumerate()
        {
            check_positive(index, "base rate", base_rate)?;
            check_positive(index, "base cost", base_cost)?;
            tiers.push(TierDefinition {
                index,
                base_rate,
                base_cost,
                name,
            });
        }

        Ok(Self { tiers, page_size })
    }

    /// The reference catalog: 48 tiers, costs at 50x the base rate, 24 per page.
    pub fn standard() -> Result<Self, CatalogError> {
        let rates = TIER_BASE_RATES.to_vec();
        let costs = rates.iter().map(|r| r * COST_TO_RATE_RATIO).collect();
        let names = TIER_NAMES.iter().map(|n| n.to_string()).collect();
        Self::new(rates, costs, names, PAGE_SIZE)
    }

    pub fn count(&self) -> usize {
        self.tiers.len()
    }

    pub fn definition_at(&self, index: usize) -> Option<&TierDefinition> {
        self.tiers.get(index)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page that tier `index` is displayed on.
    pub fn page_of(&self, index: usize) -> usize {
        index / self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.tiers.len().div_ceil(self.page_size)
    }

    /// Definitions on `page`; empty when the page does not exist.
    pub fn page(&self, page: usize) -> &[TierDefinition] {
        let start = page.saturating_mul(self.page_size).min(self.tiers.len());
        let end = start.saturating_add(self.page_size).min(self.tiers.len());
        &self.tiers[start..end]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierDefinition> {
        self.tiers.iter()
    }
}

fn check_positive(index: usize, field: &'static str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue {
            index,
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Tier {}", i + 1)).collect()
    }

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = TierCatalog::standard().expect("reference data is valid");
        assert_eq!(catalog.count(), 48);
        assert_eq!(catalog.page_size(), 24);
        assert_eq!(catalog.total_pages(), 2);

        let first = catalog.definition_at(0).unwrap();
        assert_eq!(first.name, "Bottle Cap");
        assert!((first.base_rate - 0.01).abs() < 1e-12);
        assert!((first.base_cost - 0.5).abs() < 1e-12);

        let last = catalog.definition_at(47).unwrap();
        assert_eq!(last.name, "Singularity");
        assert_eq!(last.index, 47);
    }

    #[test]
    fn test_costs_are_fifty_times_rates() {
        let catalog = TierCatalog::standard().unwrap();
        for def in catalog.iter() {
            let ratio = def.base_cost / def.base_rate;
            assert!((ratio - 50.0).abs() < 1e-9, "tier {} ratio {}", def.index, ratio);
        }
    }

    #[test]
    fn test_page_membership() {
        let catalog = TierCatalog::standard().unwrap();
        assert_eq!(catalog.page_of(0), 0);
        assert_eq!(catalog.page_of(23), 0);
        assert_eq!(catalog.page_of(24), 1);
        assert_eq!(catalog.page_of(47), 1);

        let page_two = catalog.page(1);
        assert_eq!(page_two.len(), 24);
        assert_eq!(page_two[0].name, "Inner Solar System");
        assert!(catalog.page(2).is_empty());
    }

    #[test]
    fn test_partial_last_page() {
        let catalog = TierCatalog::new(vec![1.0; 5], vec![2.0; 5], names(5), 2).unwrap();
        assert_eq!(catalog.total_pages(), 3);
        assert_eq!(catalog.page(2).len(), 1);
    }

    #[test]
    fn test_mismatched_lengths_refuse_construction() {
        let err = TierCatalog::new(vec![1.0; 3], vec![2.0; 2], names(3), 24).unwrap_err();
        assert_eq!(
            err,
            CatalogError::LengthMismatch {
                rates: 3,
                costs: 2,
                names: 3
            }
        );

        let err = TierCatalog::new(vec![1.0; 3], vec![2.0; 3], names(4), 24).unwrap_err();
        assert!(matches!(err, CatalogError::LengthMismatch { names: 4, .. }));
    }

    #[test]
    fn test_empty_and_zero_page_size_rejected() {
        assert_eq!(
            TierCatalog::new(vec![], vec![], vec![], 24).unwrap_err(),
            CatalogError::Empty
        );
        assert_eq!(
            TierCatalog::new(vec![1.0], vec![1.0], names(1), 0).unwrap_err(),
            CatalogError::ZeroPageSize
        );
    }

    #[test]
    fn test_non_positive_values_rejected() {
        let err = TierCatalog::new(vec![1.0, 0.0], vec![1.0, 1.0], names(2), 24).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidValue {
                index: 1,
                field: "base rate",
                ..
            }
        ));

        let err =
            TierCatalog::new(vec![1.0], vec![f64::INFINITY], names(1), 24).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { field: "base cost", .. }));
    }
}
