//! Wall-property corrections.
//!
//! Fluid properties vary between the bulk and the tube wall. Correlations
//! fitted at isothermal conditions are corrected by a power of the ratio of a
//! bulk property to its wall value, with one exponent when the fluid is being
//! heated and another when it is being cooled.

use uom::si::{
    f64::{DynamicViscosity, ThermodynamicTemperature},
    ratio::ratio,
};

/// A fluid property evaluated at bulk and wall conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallProperty {
    /// The fluid is heated when `bulk > wall`.
    Prandtl { bulk: f64, wall: f64 },
    /// The fluid is heated when `bulk > wall`.
    Viscosity {
        bulk: DynamicViscosity,
        wall: DynamicViscosity,
    },
    /// The fluid is heated when `bulk < wall`.
    Temperature {
        bulk: ThermodynamicTemperature,
        wall: ThermodynamicTemperature,
    },
}

/// Exponents applied to the bulk-to-wall property ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallExponents {
    pub heating: f64,
    pub cooling: f64,
}

impl WallExponents {
    /// The same exponent whether the fluid is heated or cooled.
    #[must_use]
    pub const fn symmetric(exponent: f64) -> Self {
        Self {
            heating: exponent,
            cooling: exponent,
        }
    }
}

/// Returns `(bulk / wall)^n`, with `n` chosen by the direction of heat flow.
///
/// # Example
///
/// ```
/// use twine_tube_bank::support::tube_bank::wall::{wall_factor, WallExponents, WallProperty};
///
/// let factor = wall_factor(
///     WallProperty::Prandtl { bulk: 7.0, wall: 4.0 },
///     WallExponents::symmetric(0.25),
/// );
/// assert!((factor - 1.75_f64.powf(0.25)).abs() < 1e-15);
/// ```
#[must_use]
pub fn wall_factor(property: WallProperty, exponents: WallExponents) -> f64 {
    let (ratio_to_wall, heating) = match property {
        WallProperty::Prandtl { bulk, wall } => (bulk / wall, bulk > wall),
        WallProperty::Viscosity { bulk, wall } => ((bulk / wall).get::<ratio>(), bulk > wall),
        WallProperty::Temperature { bulk, wall } => ((bulk / wall).get::<ratio>(), bulk < wall),
    };

    let exponent = if heating {
        exponents.heating
    } else {
        exponents.cooling
    };
    ratio_to_wall.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{dynamic_viscosity::pascal_second, thermodynamic_temperature::kelvin};

    const SIEDER_TATE: WallExponents = WallExponents {
        heating: 0.11,
        cooling: 0.25,
    };

    #[test]
    fn prandtl_direction() {
        let heated = wall_factor(WallProperty::Prandtl { bulk: 4.0, wall: 2.0 }, SIEDER_TATE);
        assert_relative_eq!(heated, 2.0_f64.powf(0.11));

        let cooled = wall_factor(WallProperty::Prandtl { bulk: 2.0, wall: 4.0 }, SIEDER_TATE);
        assert_relative_eq!(cooled, 0.5_f64.powf(0.25));
    }

    #[test]
    fn viscosity_direction() {
        let factor = wall_factor(
            WallProperty::Viscosity {
                bulk: DynamicViscosity::new::<pascal_second>(0.000_803),
                wall: DynamicViscosity::new::<pascal_second>(0.000_657),
            },
            SIEDER_TATE,
        );
        assert_relative_eq!(factor, (0.000_803_f64 / 0.000_657).powf(0.11), max_relative = 1e-12);
    }

    #[test]
    fn temperature_direction() {
        let factor = wall_factor(
            WallProperty::Temperature {
                bulk: ThermodynamicTemperature::new::<kelvin>(300.0),
                wall: ThermodynamicTemperature::new::<kelvin>(400.0),
            },
            SIEDER_TATE,
        );
        assert_relative_eq!(factor, 0.75_f64.powf(0.11), max_relative = 1e-12);
    }

    #[test]
    fn equal_properties_are_neutral() {
        let factor = wall_factor(WallProperty::Prandtl { bulk: 3.0, wall: 3.0 }, SIEDER_TATE);
        assert_eq!(factor, 1.0);
    }
}
