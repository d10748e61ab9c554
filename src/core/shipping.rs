//! Shipping cost strategies.
//!
//! Each rate is its own `ShippingCalculator` implementation with no shared
//! base logic. Adding a rate means adding a type; `quote` and the existing
//! calculators stay untouched.

use crate::errors::{Error, Result};
use tracing::debug;

/// Parcel dimensions used to price a shipment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package {
    weight: f64,
    distance: f64,
}

impl Package {
    /// Creates a package, rejecting negative or non-finite dimensions.
    pub fn new(weight: f64, distance: f64) -> Result<Self> {
        if !weight.is_finite() || !distance.is_finite() || weight < 0.0 || distance < 0.0 {
            return Err(Error::InvalidPackage { weight, distance });
        }
        Ok(Self { weight, distance })
    }

    /// Weight of the parcel.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Distance to ship.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}

/// Prices a package.
pub trait ShippingCalculator {
    /// Cost of shipping `package` under this rate.
    fn calculate_cost(&self, package: &Package) -> f64;
}

/// Standard ground rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegularShippingCalculator;

impl ShippingCalculator for RegularShippingCalculator {
    fn calculate_cost(&self, package: &Package) -> f64 {
        package.weight() * 1.5 * package.distance()
    }
}

/// Express rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressShippingCalculator;

impl ShippingCalculator for ExpressShippingCalculator {
    fn calculate_cost(&self, package: &Package) -> f64 {
        package.weight() * 2.5 * package.distance() * 1.5
    }
}

/// International rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct InternationalShippingCalculator;

impl ShippingCalculator for InternationalShippingCalculator {
    fn calculate_cost(&self, package: &Package) -> f64 {
        package.weight() * package.distance() * 5.0
    }
}

/// Overnight rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct OvernightShippingCalculator;

impl ShippingCalculator for OvernightShippingCalculator {
    fn calculate_cost(&self, package: &Package) -> f64 {
        package.weight() * package.distance() * 4.0
    }
}

/// Prices a package with whichever calculator the caller supplies.
#[must_use]
pub fn quote(calculator: &dyn ShippingCalculator, package: &Package) -> f64 {
    let cost = calculator.calculate_cost(package);
    debug!(
        weight = package.weight(),
        distance = package.distance(),
        cost,
        "Computed shipping quote"
    );
    cost
}
