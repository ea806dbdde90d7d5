//! Tube bank models.
//!
//! Thin [`twine_core::Model`] adapters over the correlations in
//! [`support::tube_bank`](crate::support::tube_bank).

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    f64::{Area, Pressure},
    ratio::ratio,
};

use crate::support::{
    constraint::StrictlyPositive,
    tube_bank::{
        BellRegime, Crossflow, KernShell, NusseltCorrelation, TubeBank, TubeBankError, bell, kern,
    },
};

/// Mean Nusselt number of a fixed tube bank under varying flow conditions.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_tube_bank::{
///     models::thermal::tube_bank::CrossflowHeatTransfer,
///     support::tube_bank::{Crossflow, TubeBank, ZukauskasBejan},
/// };
/// use uom::si::{f64::Length, length::meter};
///
/// let bank = TubeBank::new(
///     Length::new::<meter>(0.025),
///     Length::new::<meter>(0.05),
///     Length::new::<meter>(0.05),
/// )
/// .unwrap();
/// let model = CrossflowHeatTransfer::new(ZukauskasBejan, bank);
///
/// let nu = model.call(&Crossflow::new(1e4, 7.0, 10)).unwrap();
/// assert!((nu - 175.9202277145248).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossflowHeatTransfer<C> {
    correlation: C,
    bank: TubeBank,
}

impl<C: NusseltCorrelation> CrossflowHeatTransfer<C> {
    #[must_use]
    pub fn new(correlation: C, bank: TubeBank) -> Self {
        Self { correlation, bank }
    }

    #[must_use]
    pub fn bank(&self) -> &TubeBank {
        &self.bank
    }
}

impl<C: NusseltCorrelation> Model for CrossflowHeatTransfer<C> {
    type Input = Crossflow;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.correlation.nusselt(input, &self.bank))
    }
}

/// Shell-side pressure drop by Kern's method.
///
/// Rejects shells whose flow rate, properties, or dimensions are not strictly
/// positive, and tube pitches that leave no gap between tubes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KernPressureDrop;

impl Model for KernPressureDrop {
    type Input = KernShell;
    type Output = Pressure;
    type Error = TubeBankError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        StrictlyPositive::new(input.mass_flow)?;
        StrictlyPositive::new(input.density)?;
        StrictlyPositive::new(input.viscosity)?;
        if let Some(wall) = input.wall_viscosity {
            StrictlyPositive::new(wall)?;
        }
        StrictlyPositive::new(input.shell_diameter)?;
        StrictlyPositive::new(input.baffle_spacing)?;
        StrictlyPositive::new(input.tube_diameter)?;
        StrictlyPositive::new(input.tube_pitch - input.tube_diameter)?;

        Ok(kern::pressure_drop(input))
    }
}

/// Inputs to the Bell-Delaware correction factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BellDelawareInput {
    /// Fraction of tubes in pure crossflow between baffle tips.
    pub crossflow_tube_fraction: f64,
    /// Shell-to-baffle leakage area `Ssb`.
    pub shell_to_baffle_area: Area,
    /// Tube-to-baffle leakage area `Stb`.
    pub tube_to_baffle_area: Area,
    /// Crossflow area at the bundle centreline `Sm`.
    pub crossflow_area: Area,
    /// Area between the bundle and the shell open to bypass flow `Sb`.
    pub bypass_area: Area,
    /// Pairs of sealing strips.
    pub seal_strips: u32,
    /// Tube rows crossed between baffle tips.
    pub crossflow_rows: u32,
    pub regime: BellRegime,
}

/// Bell-Delaware correction factors for a shell-side heat transfer coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BellDelawareFactors {
    /// Baffle-cut correction.
    pub jc: f64,
    /// Baffle leakage correction.
    pub jl: f64,
    /// Bundle bypass correction.
    pub jb: f64,
}

impl BellDelawareFactors {
    /// Combined correction `Jc·Jl·Jb`.
    #[must_use]
    pub fn product(&self) -> f64 {
        self.jc * self.jl * self.jb
    }
}

/// Evaluates the Bell-Delaware baffle-cut, leakage, and bypass corrections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BellDelawareCorrections;

impl Model for BellDelawareCorrections {
    type Input = BellDelawareInput;
    type Output = BellDelawareFactors;
    type Error = TubeBankError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let crossflow_area = StrictlyPositive::new(input.crossflow_area)?.into_inner();

        let jc = bell::baffle_cut_correction(input.crossflow_tube_fraction);
        let jl = bell::baffle_leakage_correction(
            input.shell_to_baffle_area,
            input.tube_to_baffle_area,
            crossflow_area,
        )?;
        let jb = bell::bundle_bypass_correction(
            (input.bypass_area / crossflow_area).get::<ratio>(),
            input.seal_strips,
            input.crossflow_rows,
            input.regime,
        );

        Ok(BellDelawareFactors { jc, jl, jb })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, Length, MassDensity, MassRate},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        pressure::pascal,
    };

    use crate::support::{
        constraint::{ConstraintError, ConstraintResult},
        tube_bank::{Esdu73031, Grimison, Hedh, ZukauskasBejan},
    };

    fn bank(diameter: f64, parallel: f64, normal: f64) -> ConstraintResult<TubeBank> {
        TubeBank::new(
            Length::new::<meter>(diameter),
            Length::new::<meter>(parallel),
            Length::new::<meter>(normal),
        )
    }

    fn m2(value: f64) -> Area {
        Area::new::<square_meter>(value)
    }

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

    fn bell_input() -> BellDelawareInput {
        BellDelawareInput {
            crossflow_tube_fraction: 0.82,
            shell_to_baffle_area: m2(1.0),
            tube_to_baffle_area: m2(3.0),
            crossflow_area: m2(8.0),
            bypass_area: m2(4.0),
            seal_strips: 5,
            crossflow_rows: 25,
            regime: BellRegime::Turbulent,
        }
    }

    #[test]
    fn heat_transfer_models_delegate_to_correlations() -> ConstraintResult<()> {
        let flow = Crossflow::new(10263.37, 0.708, 11);
        let bank = bank(0.025, 0.05, 0.05)?;

        let Ok(nu) = CrossflowHeatTransfer::new(Grimison, bank).call(&flow);
        assert_relative_eq!(nu, 79.07883866010096, max_relative = 1e-9);

        let Ok(nu) = CrossflowHeatTransfer::new(Hedh, bank).call(&flow);
        assert_relative_eq!(nu, 149.18735251017594, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn heat_transfer_model_keeps_its_bank() -> ConstraintResult<()> {
        let bank = bank(0.025, 0.09, 0.05)?;
        let model = CrossflowHeatTransfer::new(Esdu73031::default(), bank);
        assert_eq!(model.bank(), &bank);

        let flow = Crossflow::new(1.32e4, 0.71, 8);
        let Ok(nu) = model.call(&flow);
        assert_relative_eq!(nu, 98.2563319140594, max_relative = 1e-12);

        let Ok(nu) = CrossflowHeatTransfer::new(ZukauskasBejan, bank).call(&flow);
        assert!(nu > 0.0);
        Ok(())
    }

    #[test]
    fn kern_model() -> Result<(), TubeBankError> {
        let dp = KernPressureDrop.call(&water_shell())?;
        assert_relative_eq!(dp.get::<pascal>(), 18980.58768759033, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn kern_model_rejects_bad_shells() {
        let no_gap = KernShell {
            tube_pitch: Length::new::<meter>(0.019),
            ..water_shell()
        };
        assert_eq!(
            KernPressureDrop.call(&no_gap),
            Err(TubeBankError::Constraint(ConstraintError::Zero))
        );

        let no_flow = KernShell {
            mass_flow: MassRate::new::<kilogram_per_second>(-1.0),
            ..water_shell()
        };
        assert_eq!(
            KernPressureDrop.call(&no_flow),
            Err(TubeBankError::Constraint(ConstraintError::Negative))
        );

        let bad_wall = KernShell {
            wall_viscosity: Some(DynamicViscosity::new::<pascal_second>(0.0)),
            ..water_shell()
        };
        assert!(KernPressureDrop.call(&bad_wall).is_err());
    }

    #[test]
    fn bell_delaware_factors() -> Result<(), TubeBankError> {
        let factors = BellDelawareCorrections.call(&bell_input())?;
        assert_relative_eq!(factors.jc, 1.1258554691854046, max_relative = 1e-9);
        assert_relative_eq!(factors.jl, 0.5906621282470393, max_relative = 1e-9);
        assert_relative_eq!(factors.jb, 0.8469611761197694, max_relative = 1e-9);
        assert_relative_eq!(
            factors.product(),
            factors.jc * factors.jl * factors.jb
        );
        Ok(())
    }

    #[test]
    fn bell_delaware_errors() {
        let bad_split = BellDelawareInput {
            shell_to_baffle_area: m2(-1.0),
            tube_to_baffle_area: m2(1.0),
            ..bell_input()
        };
        assert!(matches!(
            BellDelawareCorrections.call(&bad_split),
            Err(TubeBankError::SplitFractionOutOfBounds { .. })
        ));

        let no_crossflow = BellDelawareInput {
            crossflow_area: m2(0.0),
            ..bell_input()
        };
        assert_eq!(
            BellDelawareCorrections.call(&no_crossflow),
            Err(TubeBankError::Constraint(ConstraintError::Zero))
        );
    }
}
