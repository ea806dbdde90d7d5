use super::TubeBank;

/// Flow conditions for a heat-transfer correlation.
///
/// The Reynolds number is based on the tube outer diameter and the velocity
/// through the minimum flow area of the bank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossflow {
    pub reynolds: f64,
    pub prandtl: f64,
    /// Prandtl number at the wall temperature, when known.
    pub wall_prandtl: Option<f64>,
    /// Number of tube rows the flow crosses.
    pub tube_rows: u32,
}

impl Crossflow {
    /// Crossflow conditions without a wall-property correction.
    #[must_use]
    pub fn new(reynolds: f64, prandtl: f64, tube_rows: u32) -> Self {
        Self {
            reynolds,
            prandtl,
            wall_prandtl: None,
            tube_rows,
        }
    }

    /// Adds the wall Prandtl number, enabling the wall-property correction in
    /// correlations that support it.
    #[must_use]
    pub fn with_wall_prandtl(self, wall_prandtl: f64) -> Self {
        Self {
            wall_prandtl: Some(wall_prandtl),
            ..self
        }
    }
}

/// A correlation for the mean Nusselt number of a tube bank in crossflow.
pub trait NusseltCorrelation {
    /// Mean Nusselt number `h·Do/k` over the bank.
    fn nusselt(&self, flow: &Crossflow, bank: &TubeBank) -> f64;
}
