//! Heat transfer and pressure drop correlations for tube banks in crossflow.
//!
//! # Overview
//!
//! A tube bank is described by its [`TubeBank`] geometry: the tube outer
//! diameter and the pitches along ([`Pitches::parallel`]) and across
//! ([`Pitches::normal`]) the flow. Banks whose two pitches differ by more than
//! 5% are [`Arrangement::Staggered`]; the rest are [`Arrangement::Aligned`].
//!
//! This toolkit provides:
//!
//! - **Heat transfer**: [`grimison`], [`zukauskas`], [`esdu`] and [`hedh`],
//!   each also available as a [`NusseltCorrelation`] implementor
//! - **Pressure drop**: [`kern::pressure_drop`] and [`zukauskas::pressure_drop`]
//! - **Bell-Delaware factors**: [`bell`]
//! - **Wall-property corrections**: [`wall`]
//!
//! Several methods read from digitized charts. These are fitted with
//! smoothing splines once per process, on first use, and kept in the shared
//! [`charts::registry`].
//!
//! # Example
//!
//! ```
//! use twine_tube_bank::support::tube_bank::{
//!     Crossflow, Esdu73031, Hedh, NusseltCorrelation, TubeBank, ZukauskasBejan,
//! };
//! use uom::si::{f64::Length, length::millimeter};
//!
//! let bank = TubeBank::new(
//!     Length::new::<millimeter>(25.0),
//!     Length::new::<millimeter>(50.0),
//!     Length::new::<millimeter>(50.0),
//! )
//! .unwrap();
//! let flow = Crossflow::new(1e4, 7.0, 10);
//!
//! let esdu = Esdu73031::default();
//! let correlations: [&dyn NusseltCorrelation; 3] = [&ZukauskasBejan, &esdu, &Hedh];
//! for correlation in correlations {
//!     let nu = correlation.nusselt(&flow, &bank);
//!     assert!(nu > 100.0 && nu < 500.0);
//! }
//! ```

pub mod bell;
pub mod charts;
mod correlation;
mod error;
pub mod esdu;
mod geometry;
pub mod grimison;
pub mod hedh;
pub mod kern;
pub mod wall;
pub mod zukauskas;

pub use bell::BellRegime;
pub use correlation::{Crossflow, NusseltCorrelation};
pub use error::TubeBankError;
pub use esdu::{Esdu73031, RowCorrectionMethod};
pub use geometry::{Arrangement, Pitches, TubeBank};
pub use grimison::Grimison;
pub use hedh::Hedh;
pub use kern::KernShell;
pub use zukauskas::ZukauskasBejan;
