use crate::epoch::Toc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of numeric fields a broadcast record carries
pub(crate) const NUM_FIELDS: usize = 29;

/// [Ephemeris] describes one GPS broadcast navigation message:
/// the short term Keplerian orbit of one vehicle, published at one
/// reference epoch. Fields map positionally onto the numeric token
/// stream of one 8 line record, in broadcast order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ephemeris {
    /// Calendar time of clock this message was published at
    pub toc: Toc,
    /// Clock bias [s]
    pub clock_bias: f64,
    /// Clock drift [s.s⁻¹]
    pub clock_drift: f64,
    /// Clock drift rate [s.s⁻²]
    pub clock_drift_rate: f64,
    /// Issue of data, ephemeris
    pub iode: f64,
    /// Sine harmonic correction to orbit radius [m]
    pub crs: f64,
    /// Mean motion difference from computed value [rad.s⁻¹]
    pub dn: f64,
    /// Mean anomaly at reference time [rad]
    pub m_0: f64,
    /// Cosine harmonic correction to argument of latitude [rad]
    pub cuc: f64,
    /// Eccentricity
    pub e: f64,
    /// Sine harmonic correction to argument of latitude [rad]
    pub cus: f64,
    /// Square root of the semi major axis [m^0.5]
    pub sqrt_a: f64,
    /// Time of ephemeris, GPS time of week [s]
    pub toe: f64,
    /// Cosine harmonic correction to inclination [rad]
    pub cic: f64,
    /// Longitude of ascending node at weekly epoch [rad]
    pub omega_0: f64,
    /// Sine harmonic correction to inclination [rad]
    pub cis: f64,
    /// Inclination at reference time [rad]
    pub i_0: f64,
    /// Cosine harmonic correction to orbit radius [m]
    pub crc: f64,
    /// Argument of perigee [rad]
    pub omega: f64,
    /// Rate of right ascension [rad.s⁻¹]
    pub omega_dot: f64,
    /// Rate of inclination [rad.s⁻¹]
    pub i_dot: f64,
    /// Codes on L2 channel
    pub l2_codes: f64,
    /// GPS week counter (unused: time of week arithmetic only)
    pub week: f64,
    /// L2 P data flag
    pub l2p_flag: f64,
    /// Vehicle accuracy [m]
    pub accuracy: f64,
    /// Vehicle health flag
    pub health: f64,
    /// Group delay [s]
    pub tgd: f64,
    /// Issue of data, clock
    pub iodc: f64,
    /// Transmission time of message, GPS time of week [s]
    pub tx_time: f64,
    /// Spare / fit interval
    pub spare: f64,
}

impl Ephemeris {
    /// Builds [Ephemeris] from the ordered numeric token stream of one
    /// record, mapped positionally onto the broadcast field layout.
    /// Returns None on incomplete streams and non physical `sqrt_a`:
    /// such records are never constructed.
    pub(crate) fn from_tokens(toc: Toc, tokens: &[f64]) -> Option<Self> {
        if tokens.len() < NUM_FIELDS {
            return None;
        }
        let ephemeris = Self {
            toc,
            clock_bias: tokens[0],
            clock_drift: tokens[1],
            clock_drift_rate: tokens[2],
            iode: tokens[3],
            crs: tokens[4],
            dn: tokens[5],
            m_0: tokens[6],
            cuc: tokens[7],
            e: tokens[8],
            cus: tokens[9],
            sqrt_a: tokens[10],
            toe: tokens[11],
            cic: tokens[12],
            omega_0: tokens[13],
            cis: tokens[14],
            i_0: tokens[15],
            crc: tokens[16],
            omega: tokens[17],
            omega_dot: tokens[18],
            i_dot: tokens[19],
            l2_codes: tokens[20],
            week: tokens[21],
            l2p_flag: tokens[22],
            accuracy: tokens[23],
            health: tokens[24],
            tgd: tokens[25],
            iodc: tokens[26],
            tx_time: tokens[27],
            spare: tokens[28],
        };
        if ephemeris.sqrt_a > 0.0 {
            Some(ephemeris)
        } else {
            None
        }
    }

    /// Returns onboard clock terms (bias [s], drift [s/s], drift rate [s/s²])
    pub fn sv_clock(&self) -> (f64, f64, f64) {
        (self.clock_bias, self.clock_drift, self.clock_drift_rate)
    }

    /// Returns the time of clock as GPS time of week [s]
    pub fn toc_time_of_week(&self) -> f64 {
        self.toc.to_time_of_week()
    }
}
