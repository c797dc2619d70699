//! # Pricing Policy
//!
//! Maps (service, weight) to a cost via a per-kilogram rate table.
//!
//! The table is configuration, not call-site constants: the default
//! carries the shop's standard rates, and custom tables can be built for
//! promotional pricing or a trimmed service menu. Quoting a service the
//! table has no rate for prices at zero instead of failing, because the
//! same function backs the live cost preview while the clerk is still
//! filling in the form; the missing rate is flagged on the quote so the
//! form can warn.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;
use crate::types::ServiceType;
use crate::weight::{Weight, GRAMS_PER_KG};

/// Standard rate: dry cleaning, per kilogram.
pub const DRY_CLEAN_RATE: Money = Money::new(5000);
/// Standard rate: ironing, per kilogram.
pub const IRON_RATE: Money = Money::new(3000);
/// Standard rate: wet wash, per kilogram.
pub const WET_WASH_RATE: Money = Money::new(4000);

// =============================================================================
// Rate Table
// =============================================================================

/// Per-kilogram rates by service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    rates: BTreeMap<ServiceType, Money>,
}

impl RateTable {
    /// An empty table. Every quote against it prices at zero with
    /// `rate_known == false`.
    pub fn empty() -> Self {
        RateTable {
            rates: BTreeMap::new(),
        }
    }

    /// Sets or overrides a rate.
    pub fn with_rate(mut self, service: ServiceType, per_kg: Money) -> Self {
        self.rates.insert(service, per_kg);
        self
    }

    /// Removes a rate, leaving the service quotable but unpriced.
    pub fn without_rate(mut self, service: ServiceType) -> Self {
        self.rates.remove(&service);
        self
    }

    /// The per-kilogram rate for a service, if the table carries one.
    ///
    /// `None` is the signal callers use to warn about an unpriced
    /// service; [`RateTable::quote`] maps it to a zero cost.
    pub fn rate(&self, service: ServiceType) -> Option<Money> {
        self.rates.get(&service).copied()
    }

    /// Prices a weight of laundry for a service.
    ///
    /// `cost = rate_per_kg * weight`, computed in integer arithmetic at
    /// gram precision, rounding half up on sub-rupiah remainders. A
    /// service without a rate quotes at zero with `rate_known == false`.
    pub fn quote(&self, service: ServiceType, weight: Weight) -> Quote {
        match self.rate(service) {
            Some(per_kg) => Quote {
                cost: cost_for(per_kg, weight),
                rate_known: true,
            },
            None => Quote {
                cost: Money::zero(),
                rate_known: false,
            },
        }
    }

    /// Live-preview entry point: lenient weight parse, then quote.
    /// Blank or garbage weight text previews as `Rp 0`.
    pub fn quote_input(&self, service: ServiceType, weight_text: &str) -> Quote {
        self.quote(service, Weight::parse_lenient(weight_text))
    }
}

/// The default table carries the shop's standard rates.
impl Default for RateTable {
    fn default() -> Self {
        RateTable::empty()
            .with_rate(ServiceType::DryClean, DRY_CLEAN_RATE)
            .with_rate(ServiceType::Iron, IRON_RATE)
            .with_rate(ServiceType::WetWash, WET_WASH_RATE)
    }
}

/// A priced quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The computed cost; zero when the rate is unknown.
    pub cost: Money,
    /// False when the table had no rate for the service, so the form can
    /// warn even though the computation did not fail.
    pub rate_known: bool,
}

/// rate/kg times weight in grams, i128 intermediate to avoid overflow.
fn cost_for(per_kg: Money, weight: Weight) -> Money {
    let numerator = per_kg.amount() as i128 * weight.grams() as i128;
    let half = GRAMS_PER_KG as i128 / 2;
    Money::new(((numerator + half) / GRAMS_PER_KG as i128) as i64)
}

// =============================================================================
// Unit Tests
// =============================================================================
