//! # Pricing Module
//!
//! The rate formula: a pure, total function from (weight, package type,
//! service tier) to a cost.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  total = (BASE_RATE + weight_cost) × package_mult × service_mult        │
//! │                                                                         │
//! │  weight_cost (one rate for the WHOLE weight, picked by band):           │
//! │                                                                         │
//! │    kg < 1         ──►  kg × 2                                           │
//! │    1 ≤ kg ≤ 5     ──►  kg × 5     (both ends inclusive)                 │
//! │    kg > 5         ──►  kg × 8                                           │
//! │                                                                         │
//! │  Then rounded ONCE to cents (see Money::from_major_rounded)             │
//! │  Weights have no upper bound; a total past the f64 range is infinite    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Worked Examples (Box, Standard)
//! ```text
//!   0.5 kg  → (10 + 1.0)   × 1.0 × 1.0 =  11.00
//!   1.0 kg  → (10 + 5.0)   × 1.0 × 1.0 =  15.00
//!   5.0 kg  → (10 + 25.0)  × 1.0 × 1.0 =  35.00
//!   5.01 kg → (10 + 40.08) × 1.0 × 1.0 =  50.08
//! ```
//!
//! Multipliers are looked up in small tables. A value missing from a table
//! degrades to the neutral multiplier 1.0 instead of failing; the tests
//! assert the tables are complete so that fallback never fires in practice.

use crate::money::Money;
use crate::types::{EstimateRequest, EstimateResult, PackageType, ServiceTier, Weight};

// =============================================================================
// Constants
// =============================================================================

/// Flat charge added to every estimate, in major currency units.
pub const BASE_RATE: f64 = 10.0;

/// Weights strictly below this use the light rate.
pub const LIGHT_BAND_LIMIT_KG: f64 = 1.0;

/// Weights up to and including this use the mid rate.
pub const MID_BAND_LIMIT_KG: f64 = 5.0;

/// Per-kg rate below 1 kg.
pub const LIGHT_RATE_PER_KG: f64 = 2.0;

/// Per-kg rate from 1 kg to 5 kg inclusive.
pub const MID_RATE_PER_KG: f64 = 5.0;

/// Per-kg rate above 5 kg.
pub const HEAVY_RATE_PER_KG: f64 = 8.0;

/// Multiplier used when a table has no entry for a selection.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Cost multiplier per package type.
pub const PACKAGE_MULTIPLIERS: &[(PackageType, f64)] = &[
    (PackageType::Box, 1.0),
    (PackageType::Envelope, 0.7),
    (PackageType::Pallet, 3.5),
];

/// Cost multiplier per service tier.
pub const SERVICE_MULTIPLIERS: &[(ServiceTier, f64)] = &[
    (ServiceTier::Standard, 1.0),
    (ServiceTier::Express, 1.6),
    (ServiceTier::SameDay, 2.8),
];

/// Delivery time label per service tier.
pub const SERVICE_TIMES: &[(ServiceTier, &str)] = &[
    (ServiceTier::Standard, "2-4 business days"),
    (ServiceTier::Express, "1-2 business days"),
    (ServiceTier::SameDay, "Today by 8 PM"),
];

fn lookup<K: PartialEq + Copy, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

// =============================================================================
// Pricing Functions
// =============================================================================

/// Weight component of the cost, in major units.
///
/// ## Example
/// ```rust
/// use parcego_core::pricing::weight_cost;
///
/// assert_eq!(weight_cost(0.5), 1.0);
/// assert_eq!(weight_cost(1.0), 5.0);  // 1 kg is already mid band
/// assert_eq!(weight_cost(5.0), 25.0); // 5 kg is still mid band
/// assert_eq!(weight_cost(6.0), 48.0);
/// ```
pub fn weight_cost(kg: f64) -> f64 {
    if kg < LIGHT_BAND_LIMIT_KG {
        kg * LIGHT_RATE_PER_KG
    } else if kg <= MID_BAND_LIMIT_KG {
        kg * MID_RATE_PER_KG
    } else {
        kg * HEAVY_RATE_PER_KG
    }
}

/// Multiplier for a package type (1.0 if the table has no entry).
pub fn package_multiplier(package_type: PackageType) -> f64 {
    lookup(PACKAGE_MULTIPLIERS, package_type).unwrap_or(NEUTRAL_MULTIPLIER)
}

/// Multiplier for a service tier (1.0 if the table has no entry).
pub fn service_multiplier(service_tier: ServiceTier) -> f64 {
    lookup(SERVICE_MULTIPLIERS, service_tier).unwrap_or(NEUTRAL_MULTIPLIER)
}

/// Delivery time label for a service tier (empty if the table has no entry).
pub fn delivery_time(service_tier: ServiceTier) -> &'static str {
    lookup(SERVICE_TIMES, service_tier).unwrap_or_default()
}

/// Computes the estimated cost.
///
/// Total and deterministic: validated weight and enum selections cannot
/// make it fail. Large weights price in full; only a total beyond `f64::MAX`
/// (about 2.3e306 kg for Pallet / Same Day) comes back non-finite.
///
/// ## Example
/// ```rust
/// use parcego_core::pricing::compute_cost;
/// use parcego_core::types::{PackageType, ServiceTier, Weight};
///
/// let weight = Weight::try_from_kg(2.0).unwrap();
/// let cost = compute_cost(weight, PackageType::Pallet, ServiceTier::SameDay);
/// assert_eq!(cost.amount_string(), "196.00");
/// ```
pub fn compute_cost(weight: Weight, package_type: PackageType, service_tier: ServiceTier) -> Money {
    let total = (BASE_RATE + weight_cost(weight.kg()))
        * package_multiplier(package_type)
        * service_multiplier(service_tier);

    Money::from_major_rounded(total)
}

/// Prices a captured request and builds the result card data.
pub fn estimate(request: &EstimateRequest) -> EstimateResult {
    EstimateResult {
        request_id: request.id.clone(),
        cost: compute_cost(request.weight, request.package_type, request.service_tier),
        delivery_time: delivery_time(request.service_tier).to_string(),
        service_tier: request.service_tier,
        weight: request.weight,
        package_type: request.package_type,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_weight;

    fn cost(raw: &str, package: PackageType, service: ServiceTier) -> String {
        let weight = validate_weight(raw).unwrap();
        compute_cost(weight, package, service).amount_string()
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(cost("0.5", PackageType::Box, ServiceTier::Standard), "11.00");
        assert_eq!(cost("1.0", PackageType::Box, ServiceTier::Standard), "15.00");
        assert_eq!(cost("5.0", PackageType::Box, ServiceTier::Standard), "35.00");
        assert_eq!(cost("5.01", PackageType::Box, ServiceTier::Standard), "50.08");
    }

    #[test]
    fn test_minimum_weight_price() {
        assert_eq!(cost("0.1", PackageType::Box, ServiceTier::Standard), "10.20");
    }

    #[test]
    fn test_multiplier_composition() {
        assert_eq!(cost("2", PackageType::Pallet, ServiceTier::SameDay), "196.00");
        // (10 + 10) × 0.7 × 1.6
        assert_eq!(cost("2", PackageType::Envelope, ServiceTier::Express), "22.40");
    }

    #[test]
    fn test_float_noise_is_rounded_away() {
        // (10 + 16.5) × 2.8 = 74.19999999999999 in f64
        assert_eq!(cost("3.3", PackageType::Box, ServiceTier::SameDay), "74.20");
    }

    #[test]
    fn test_tables_cover_every_option() {
        for package in PackageType::ALL {
            assert!(
                lookup(PACKAGE_MULTIPLIERS, package).is_some(),
                "{package} has no multiplier"
            );
        }
        for tier in ServiceTier::ALL {
            assert!(lookup(SERVICE_MULTIPLIERS, tier).is_some(), "{tier} has no multiplier");
            assert!(lookup(SERVICE_TIMES, tier).is_some(), "{tier} has no delivery time");
        }
    }

    #[test]
    fn test_missing_entry_falls_back_to_neutral() {
        let partial: &[(ServiceTier, f64)] = &[(ServiceTier::Express, 1.6)];
        let multiplier = lookup(partial, ServiceTier::SameDay).unwrap_or(NEUTRAL_MULTIPLIER);
        assert_eq!(multiplier, 1.0);
    }

    #[test]
    fn test_delivery_times() {
        assert_eq!(delivery_time(ServiceTier::Standard), "2-4 business days");
        assert_eq!(delivery_time(ServiceTier::Express), "1-2 business days");
        assert_eq!(delivery_time(ServiceTier::SameDay), "Today by 8 PM");
    }

    #[test]
    fn test_estimate_carries_request_context() {
        let weight = validate_weight("2.5").unwrap();
        let request = EstimateRequest::new(weight, PackageType::Envelope, ServiceTier::Express);
        let result = estimate(&request);

        assert_eq!(result.request_id, request.id);
        assert_eq!(result.service_tier, ServiceTier::Express);
        assert_eq!(result.delivery_time, "1-2 business days");
        assert_eq!(result.basis_line(), "Based on 2.5kg Envelope");
        // (10 + 12.5) × 0.7 × 1.6 = 25.2
        assert_eq!(result.cost_string(), "25.20");
    }

    #[test]
    fn test_heavy_weights_price_in_full() {
        for raw in ["2e16", "1e300"] {
            let weight = validate_weight(raw).unwrap();
            let expected = (BASE_RATE + weight.kg() * HEAVY_RATE_PER_KG) * 3.5 * 2.8;
            let cost = compute_cost(weight, PackageType::Pallet, ServiceTier::SameDay);

            assert_eq!(cost.amount(), expected, "{raw}");
            assert!(cost.amount() > i64::MAX as f64, "{raw}");
        }
    }

    #[test]
    fn test_total_past_float_range_is_not_finite() {
        let weight = validate_weight("1e307").unwrap();
        let cost = compute_cost(weight, PackageType::Pallet, ServiceTier::SameDay);

        assert!(!cost.is_finite());
        assert_eq!(cost.amount_string(), "Infinity");

        // Just below the edge still prices
        let weight = validate_weight("2e306").unwrap();
        assert!(compute_cost(weight, PackageType::Pallet, ServiceTier::SameDay).is_finite());
    }

    #[test]
    fn test_pricing_is_deterministic() {
        let weight = validate_weight("7.25").unwrap();
        let first = compute_cost(weight, PackageType::Pallet, ServiceTier::Express);
        let second = compute_cost(weight, PackageType::Pallet, ServiceTier::Express);
        assert_eq!(first, second);
    }
}
