//! Kern's method for shell-side pressure drop.

use std::f64::consts::PI;

use uom::si::{
    f64::{Area, DynamicViscosity, Length, MassDensity, MassRate, Pressure, Ratio, Velocity},
    ratio::ratio,
};

use super::{
    charts::registry,
    wall::{WallExponents, WallProperty, wall_factor},
};

const VISCOSITY_EXPONENTS: WallExponents = WallExponents::symmetric(0.14);

/// Shell-side flow and geometry for Kern's method.
///
/// Assumes a square tube layout when computing the equivalent diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernShell {
    pub mass_flow: MassRate,
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    /// Viscosity at the wall temperature, when known.
    pub wall_viscosity: Option<DynamicViscosity>,
    /// Inner diameter of the shell.
    pub shell_diameter: Length,
    pub baffle_spacing: Length,
    pub tube_pitch: Length,
    pub tube_diameter: Length,
    pub baffles: u32,
}

impl KernShell {
    /// Crossflow area at the shell centreline, `Ds·(p - Do)·LB / p`.
    #[must_use]
    pub fn crossflow_area(&self) -> Area {
        self.shell_diameter * (self.tube_pitch - self.tube_diameter) * self.baffle_spacing
            / self.tube_pitch
    }

    /// Equivalent diameter of a square layout, `4·(p² - π·Do²/4) / (π·Do)`.
    #[must_use]
    pub fn equivalent_diameter(&self) -> Length {
        let free_area = self.tube_pitch * self.tube_pitch
            - self.tube_diameter * self.tube_diameter * (PI / 4.0);
        free_area * 4.0 / (self.tube_diameter * PI)
    }

    /// Shell-side velocity through the crossflow area.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.mass_flow / self.crossflow_area() / self.density
    }

    /// Shell-side Reynolds number on the equivalent diameter.
    #[must_use]
    pub fn reynolds(&self) -> f64 {
        let re: Ratio =
            self.density * self.equivalent_diameter() * self.velocity() / self.viscosity;
        re.get::<ratio>()
    }
}

/// Kern's dimensionless shell-side friction factor at a Reynolds number.
///
/// Reynolds numbers outside the chart extrapolate the fitted curve.
#[must_use]
pub fn friction_factor(reynolds: f64) -> f64 {
    registry().kern_friction().evaluate(reynolds)
}

/// Shell-side pressure drop by Kern's method.
///
/// `ΔP = f·G²·Ds·(NB + 1) / (2·ρ·De)` with mass flux `G = ρ·Vs`, divided by
/// `(μ/μw)^0.14` when the wall viscosity is known.
///
/// # Example
///
/// ```
/// use twine_tube_bank::support::tube_bank::kern::{self, KernShell};
/// use uom::si::{
///     dynamic_viscosity::pascal_second,
///     f64::{DynamicViscosity, Length, MassDensity, MassRate},
///     length::meter,
///     mass_density::kilogram_per_cubic_meter,
///     mass_rate::kilogram_per_second,
///     pressure::pascal,
/// };
///
/// let shell = KernShell {
///     mass_flow: MassRate::new::<kilogram_per_second>(11.0),
///     density: MassDensity::new::<kilogram_per_cubic_meter>(995.0),
///     viscosity: DynamicViscosity::new::<pascal_second>(0.000803),
///     wall_viscosity: Some(DynamicViscosity::new::<pascal_second>(0.000657)),
///     shell_diameter: Length::new::<meter>(0.584),
///     baffle_spacing: Length::new::<meter>(0.1524),
///     tube_pitch: Length::new::<meter>(0.0254),
///     tube_diameter: Length::new::<meter>(0.019),
///     baffles: 22,
/// };
///
/// let dp = kern::pressure_drop(&shell);
/// assert!((dp.get::<pascal>() - 18980.58768759033).abs() < 1e-4);
/// ```
#[must_use]
pub fn pressure_drop(shell: &KernShell) -> Pressure {
    let velocity = shell.velocity();
    let mass_flux = velocity * shell.density;
    let f = friction_factor(shell.reynolds());

    let dp = mass_flux * mass_flux * shell.shell_diameter * f64::from(shell.baffles + 1) * f
        / (shell.density * shell.equivalent_diameter() * 2.0);

    match shell.wall_viscosity {
        Some(wall) => {
            dp / wall_factor(
                WallProperty::Viscosity {
                    bulk: shell.viscosity,
                    wall,
                },
                VISCOSITY_EXPONENTS,
            )
        }
        None => dp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second, length::meter, mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second, pressure::pascal,
    };

    fn water_shell() -> KernShell {
        KernShell {
            mass_flow: MassRate::new::<kilogram_per_second>(11.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(995.0),
            viscosity: DynamicViscosity::new::<pascal_second>(0.000803),
            wall_viscosity: Some(DynamicViscosity::new::<pascal_second>(0.000657)),
            shell_diameter: Length::new::<meter>(0.584),
            baffle_spacing: Length::new::<meter>(0.1524),
            tube_pitch: Length::new::<meter>(0.0254),
            tube_diameter: Length::new::<meter>(0.019),
            baffles: 22,
        }
    }

    #[test]
    fn friction_chart() {
        assert_relative_eq!(friction_factor(1e4), 0.33333410502407984, max_relative = 1e-9);
        assert_relative_eq!(friction_factor(100.0), 0.9260801834826572, max_relative = 1e-9);
    }

    #[test]
    fn reynolds_number() {
        assert_relative_eq!(water_shell().reynolds(), 14803.198210482495, max_relative = 1e-12);
    }

    #[test]
    fn pressure_drop_with_wall_viscosity() {
        let dp = pressure_drop(&water_shell());
        assert_relative_eq!(dp.get::<pascal>(), 18980.58768759033, max_relative = 1e-9);
    }

    #[test]
    fn pressure_drop_without_wall_viscosity() {
        let shell = KernShell {
            wall_viscosity: None,
            ..water_shell()
        };
        assert_relative_eq!(
            pressure_drop(&shell).get::<pascal>(),
            19521.38738647667,
            max_relative = 1e-9
        );
    }

    #[test]
    fn more_baffles_more_pressure_drop() {
        let few = pressure_drop(&KernShell {
            baffles: 5,
            ..water_shell()
        });
        let many = pressure_drop(&water_shell());
        assert_relative_eq!((many / few).get::<ratio>(), 23.0 / 6.0, max_relative = 1e-12);
    }
}
