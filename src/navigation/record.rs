use crate::navigation::Ephemeris;

use gnss::prelude::SV;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Navigation [Record]: per vehicle ephemeris sequences,
/// in file appearance order (not time sorted). Built once by the
/// parser, immutable afterwards.
pub type Record = BTreeMap<SV, Vec<Ephemeris>>;

/// Returns the [Ephemeris] governing instant `t` (GPS time of week [s]):
/// the record whose time of clock lies nearest to `t`. Ties resolve to
/// the earliest published record. Selection is based on the time of
/// clock, never on the orbital reference time.
pub(crate) fn nearest_toc(ephemerides: &[Ephemeris], t: f64) -> Option<&Ephemeris> {
    let index = ephemerides
        .iter()
        .position_min_by(|lhs, rhs| {
            let lhs = (t - lhs.toc_time_of_week()).abs();
            let rhs = (t - rhs.toc_time_of_week()).abs();
            lhs.total_cmp(&rhs)
        })?;
    Some(&ephemerides[index])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::epoch::Toc;

    /// Minimal ephemeris published at given time of clock
    fn published_at(hour: u8, minute: u8, iode: f64) -> Ephemeris {
        Ephemeris {
            toc: Toc {
                year: 2024,
                month: 1,
                day: 1,
                hour,
                minute,
                second: 0.0,
            },
            clock_bias: 0.0,
            clock_drift: 0.0,
            clock_drift_rate: 0.0,
            iode,
            crs: 0.0,
            dn: 0.0,
            m_0: 0.0,
            cuc: 0.0,
            e: 0.0,
            cus: 0.0,
            sqrt_a: 5_153.0,
            toe: 0.0,
            cic: 0.0,
            omega_0: 0.0,
            cis: 0.0,
            i_0: 0.0,
            crc: 0.0,
            omega: 0.0,
            omega_dot: 0.0,
            i_dot: 0.0,
            l2_codes: 0.0,
            week: 0.0,
            l2p_flag: 0.0,
            accuracy: 0.0,
            health: 0.0,
            tgd: 0.0,
            iodc: 0.0,
            tx_time: 0.0,
            spare: 0.0,
        }
    }

    #[test]
    fn nearest_selection() {
        // 2024-01-01 00:00 and 06:00: 86400 s and 108000 s into the week
        let ephemerides = [published_at(0, 0, 1.0), published_at(6, 0, 2.0)];
        let selected = nearest_toc(&ephemerides, 86_400.0).unwrap();
        assert_eq!(selected.iode, 1.0);
        let selected = nearest_toc(&ephemerides, 107_000.0).unwrap();
        assert_eq!(selected.iode, 2.0);
    }

    #[test]
    fn equidistant_tie_resolves_to_earliest() {
        // both published exactly 3 h away from the target,
        // publication order deliberately not time sorted
        let ephemerides = [published_at(6, 0, 1.0), published_at(0, 0, 2.0)];
        let target = 86_400.0 + 10_800.0;
        let selected = nearest_toc(&ephemerides, target).unwrap();
        assert_eq!(selected.iode, 1.0, "tie must resolve to the earliest record");
    }

    #[test]
    fn empty_sequence() {
        assert!(nearest_toc(&[], 0.0).is_none());
    }
}
