//! Physical constants of the GPS LNAV orbit model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) struct GM;

impl GM {
    /// WGS-84 gravitational parameter for GPS LNAV [m^3.s^-2]
    pub const GPS: f64 = 3.986005E14;
}

pub(crate) struct Omega;

impl Omega {
    /// WGS-84 Earth rotation rate [rad.s^-1]
    pub const GPS: f64 = 7.2921151467E-5;
}

pub(crate) struct MaxIterNumber;

impl MaxIterNumber {
    /// Maximum number of iterations of the eccentric anomaly solver
    pub const KEPLER: u8 = 10;
}

/// Convergence criterion of the eccentric anomaly solver [rad]
pub(crate) const KEPLER_TOLERANCE_RAD: f64 = 1E-12;

/// [EarthModel] gathers the constants the orbit solver depends on.
/// One immutable value is handed to each calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EarthModel {
    /// Gravitational parameter [m^3.s^-2]
    pub gm_m3_s2: f64,
    /// Earth rotation rate [rad.s^-1]
    pub omega_rad_s: f64,
}

impl Default for EarthModel {
    /// Builds the GPS LNAV [EarthModel]
    fn default() -> Self {
        Self {
            gm_m3_s2: GM::GPS,
            omega_rad_s: Omega::GPS,
        }
    }
}
