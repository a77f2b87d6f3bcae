#![doc = include_str!("../README.md")]

extern crate gnss_rs as gnss;

#[macro_use]
extern crate lazy_static;

pub mod epoch;
pub mod formatting;
pub mod navigation;

mod constants;
mod error;
mod linspace;

#[cfg(test)]
mod tests;

use std::{collections::BTreeMap, path::Path, str::FromStr};

use itertools::{Itertools, MinMaxResult};
use log::warn;

use crate::{
    constants::EarthModel,
    error::{Error, ParsingError},
    linspace::{TimeSeries, DEFAULT_STEP},
    navigation::{nearest_toc, parse_record, Ephemeris, PositionSample, Record},
};

use gnss::prelude::SV;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        constants::EarthModel,
        epoch::Toc,
        error::{Error, ParsingError},
        linspace::TimeSeries,
        navigation::{Ephemeris, Kepler, Perturbations, PositionSample, Record},
        compute_positions, NavigationData,
    };
    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
}

/// [NavigationData] wraps the navigation [Record] parsed from one
/// broadcast navigation file. Built once, immutable afterwards:
/// every query borrows it, none mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationData {
    /// Per vehicle [Ephemeris] sequences, in file appearance order
    pub record: Record,
}

impl NavigationData {
    /// Parses [NavigationData] from a local file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content)?)
    }

    /// Parses [NavigationData] from the entire file content.
    /// Identification field errors abort the process: no partial
    /// data base is ever returned.
    pub fn parse(content: &str) -> Result<Self, ParsingError> {
        Ok(Self {
            record: parse_record(content)?,
        })
    }

    /// Returns the sat vehicles this data base covers, in [SV] order.
    pub fn sv(&self) -> impl Iterator<Item = SV> + '_ {
        self.record.keys().copied()
    }

    /// Returns the [Ephemeris] sequence of given vehicle,
    /// in file appearance order.
    pub fn ephemerides(&self, sv: SV) -> Result<&[Ephemeris], Error> {
        self.record
            .get(&sv)
            .map(|ephemerides| ephemerides.as_slice())
            .ok_or(Error::UnknownSatellite(sv))
    }

    /// Returns the [Ephemeris] governing instant `t` (GPS time of week
    /// [s]) for given vehicle: nearest time of clock, earliest published
    /// record on ties.
    pub fn select(&self, sv: SV, t: f64) -> Result<&Ephemeris, Error> {
        nearest_toc(self.ephemerides(sv)?, t).ok_or(Error::NoEphemeris(sv))
    }

    /// Returns the (first, last) time of clock of given vehicle,
    /// GPS time of week [s]: the span its broadcast data covers.
    pub fn time_range(&self, sv: SV) -> Result<(f64, f64), Error> {
        let ephemerides = self.ephemerides(sv)?;
        match ephemerides
            .iter()
            .map(Ephemeris::toc_time_of_week)
            .minmax_by(f64::total_cmp)
        {
            MinMaxResult::NoElements => Err(Error::NoEphemeris(sv)),
            MinMaxResult::OneElement(t) => Ok((t, t)),
            MinMaxResult::MinMax(first, last) => Ok((first, last)),
        }
    }

    /// Resolves the ECEF position of given vehicle at each provided
    /// sampling epoch (GPS time of week [s]), from the governing
    /// (nearest time of clock) broadcast record.
    pub fn positions_at<T: IntoIterator<Item = f64>>(
        &self,
        sv: SV,
        epochs: T,
        model: &EarthModel,
    ) -> Result<Vec<PositionSample>, Error> {
        let ephemerides = self.ephemerides(sv)?;
        if ephemerides.is_empty() {
            return Err(Error::NoEphemeris(sv));
        }

        let mut samples = Vec::new();
        for epoch in epochs {
            let ephemeris = nearest_toc(ephemerides, epoch).ok_or(Error::NoEphemeris(sv))?;
            let (x_m, y_m, z_m) = ephemeris.ecef_position(model, epoch);
            samples.push(PositionSample {
                epoch,
                x_m,
                y_m,
                z_m,
            });
        }
        Ok(samples)
    }

    /// Resolves the ECEF trajectory of given vehicle over its entire
    /// data coverage span, sampled every 30 s (both bounds included).
    pub fn positions(&self, sv: SV, model: &EarthModel) -> Result<Vec<PositionSample>, Error> {
        let (start, end) = self.time_range(sv)?;
        let series = TimeSeries::new(start, end, DEFAULT_STEP)?;
        self.positions_at(sv, series.iter(), model)
    }

    /// Resolves the ECEF trajectory of every covered vehicle.
    /// Faulty vehicles (typically: all records dropped at parsing) are
    /// excluded from the solutions and reported in the traces, they
    /// never abort their siblings.
    pub fn all_positions(&self, model: &EarthModel) -> BTreeMap<SV, Vec<PositionSample>> {
        let mut solutions = BTreeMap::new();
        for sv in self.sv() {
            match self.positions(sv, model) {
                Ok(samples) => {
                    solutions.insert(sv, samples);
                },
                Err(error) => {
                    warn!("{}: excluded from solutions - {}", sv, error);
                },
            }
        }
        solutions
    }
}

/// Minimal entry point: parses the entire navigation file content and
/// resolves the ECEF trajectory of vehicle `prn` (like "G05") over its
/// data coverage span, sampled every 30 s, with the GPS [EarthModel].
pub fn compute_positions(content: &str, prn: &str) -> Result<Vec<PositionSample>, Error> {
    let descriptor = prn.trim();
    if descriptor.is_empty() {
        return Err(Error::SvFormat(prn.to_string()));
    }

    let sv = SV::from_str(descriptor).map_err(|_| Error::SvFormat(prn.to_string()))?;
    let data = NavigationData::parse(content)?;
    data.positions(sv, &EarthModel::default())
}
