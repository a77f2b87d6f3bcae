//! Keplerian orbit solutions from broadcast elements.
use crate::{
    constants::{EarthModel, MaxIterNumber, KEPLER_TOLERANCE_RAD},
    epoch::{HALF_WEEK, SECONDS_PER_WEEK},
    navigation::Ephemeris,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Kepler] stores the keplerian elements of one [Ephemeris]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Kepler {
    /// Semi major axis [m]
    pub a: f64,
    /// Eccentricity
    pub e: f64,
    /// Inclination at reference time [rad]
    pub i_0: f64,
    /// Longitude of ascending node at weekly epoch [rad]
    pub omega_0: f64,
    /// Mean anomaly at reference time [rad]
    pub m_0: f64,
    /// Argument of perigee [rad]
    pub omega: f64,
    /// Time of ephemeris, GPS time of week [s]
    pub toe: f64,
}

/// Orbit [Perturbations] of one [Ephemeris]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Perturbations {
    /// Mean motion difference from computed value [rad.s⁻¹]
    pub dn: f64,
    /// Rate of inclination [rad.s⁻¹]
    pub i_dot: f64,
    /// Rate of right ascension [rad.s⁻¹]
    pub omega_dot: f64,
    /// Sine harmonic correction to argument of latitude [rad]
    pub cus: f64,
    /// Cosine harmonic correction to argument of latitude [rad]
    pub cuc: f64,
    /// Sine harmonic correction to inclination [rad]
    pub cis: f64,
    /// Cosine harmonic correction to inclination [rad]
    pub cic: f64,
    /// Sine harmonic correction to orbit radius [m]
    pub crs: f64,
    /// Cosine harmonic correction to orbit radius [m]
    pub crc: f64,
}

/// One resolved satellite position: ECEF coordinates [m]
/// at one sampling epoch, GPS time of week [s].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSample {
    /// Sampling epoch, GPS time of week [s]
    pub epoch: f64,
    /// ECEF X coordinate [m]
    pub x_m: f64,
    /// ECEF Y coordinate [m]
    pub y_m: f64,
    /// ECEF Z coordinate [m]
    pub z_m: f64,
}

/// Time elapsed since the ephemeris reference time [s],
/// accounting for the weekly crossover.
pub(crate) fn time_from_ephemeris(t: f64, toe: f64) -> f64 {
    let mut t_k = t - toe;
    if t_k > HALF_WEEK {
        t_k -= SECONDS_PER_WEEK;
    } else if t_k < -HALF_WEEK {
        t_k += SECONDS_PER_WEEK;
    }
    t_k
}

/// Solves Kepler's equation M = E - e·sin(E) for the eccentric anomaly,
/// by Newton iteration starting from E = M. Iteration capped: the last
/// estimate is returned on non convergence.
fn solve_eccentric_anomaly(m_k: f64, e: f64) -> f64 {
    let mut e_k = m_k;
    for _ in 0..MaxIterNumber::KEPLER {
        let d_e = -(e_k - e * e_k.sin() - m_k) / (1.0 - e * e_k.cos());
        e_k += d_e;
        if d_e.abs() < KEPLER_TOLERANCE_RAD {
            break;
        }
    }
    e_k
}

impl Ephemeris {
    /// Returns the keplerian elements of Self
    pub fn kepler(&self) -> Kepler {
        Kepler {
            a: self.sqrt_a * self.sqrt_a,
            e: self.e,
            i_0: self.i_0,
            omega_0: self.omega_0,
            m_0: self.m_0,
            omega: self.omega,
            toe: self.toe,
        }
    }

    /// Returns the orbit [Perturbations] of Self
    pub fn perturbations(&self) -> Perturbations {
        Perturbations {
            dn: self.dn,
            i_dot: self.i_dot,
            omega_dot: self.omega_dot,
            cus: self.cus,
            cuc: self.cuc,
            cis: self.cis,
            cic: self.cic,
            crs: self.crs,
            crc: self.crc,
        }
    }

    /// Resolves the ECEF position (x, y, z) [m] of the vehicle at `t`,
    /// GPS time of week [s], from the broadcast elements of Self.
    /// Purely functional: cost is bounded by the capped eccentric
    /// anomaly solver, whatever the sampling epoch.
    pub fn ecef_position(&self, model: &EarthModel, t: f64) -> (f64, f64, f64) {
        let kepler = self.kepler();
        let perturbations = self.perturbations();

        let t_k = time_from_ephemeris(t, kepler.toe);

        // corrected mean motion & anomalies
        let n = (model.gm_m3_s2 / kepler.a.powi(3)).sqrt() + perturbations.dn;
        let m_k = kepler.m_0 + n * t_k;
        let e_k = solve_eccentric_anomaly(m_k, kepler.e);

        // true anomaly
        let (sin_e_k, cos_e_k) = e_k.sin_cos();
        let v_k = ((1.0 - kepler.e.powi(2)).sqrt() * sin_e_k).atan2(cos_e_k - kepler.e);

        // latitude argument and its harmonic corrections
        let phi_k = v_k + kepler.omega;
        let (sin_2phi_k, cos_2phi_k) = (2.0 * phi_k).sin_cos();

        let u_k = phi_k + perturbations.cus * sin_2phi_k + perturbations.cuc * cos_2phi_k;
        let r_k = kepler.a * (1.0 - kepler.e * cos_e_k)
            + perturbations.crs * sin_2phi_k
            + perturbations.crc * cos_2phi_k;
        let i_k = kepler.i_0
            + perturbations.i_dot * t_k
            + perturbations.cis * sin_2phi_k
            + perturbations.cic * cos_2phi_k;

        // corrected ascending node longitude, in the rotating frame
        let omega_k = kepler.omega_0 + (perturbations.omega_dot - model.omega_rad_s) * t_k
            - model.omega_rad_s * kepler.toe;

        // position in orbital plane
        let (sin_u_k, cos_u_k) = u_k.sin_cos();
        let (x, y) = (r_k * cos_u_k, r_k * sin_u_k);

        // rotated to ECEF
        let (sin_omega_k, cos_omega_k) = omega_k.sin_cos();
        let (sin_i_k, cos_i_k) = i_k.sin_cos();
        (
            x * cos_omega_k - y * cos_i_k * sin_omega_k,
            x * sin_omega_k + y * cos_i_k * cos_omega_k,
            y * sin_i_k,
        )
    }
}
