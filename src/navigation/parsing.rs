//! Broadcast navigation file parsing.
use crate::{
    epoch::Toc,
    error::ParsingError,
    navigation::{Ephemeris, Record},
};

use gnss::prelude::{Constellation, SV};
use log::debug;
use regex::Regex;
use std::str::FromStr;

/// Physical lines per broadcast record
const LINES_PER_RECORD: usize = 8;

/// Header termination marker
const HEADER_TERMINATION: &str = "END OF HEADER";

lazy_static! {
    /// FORTRAN style floating point number, 'D' exponent marker
    static ref FORTRAN_FLOAT: Regex =
        Regex::new(r"[+-]?\d+\.\d+D[+-]?\d+").unwrap();
}

/// Builds the navigation [Record] from the entire file content.
/// Lines up to the header termination marker are discarded, the body is
/// consumed in fixed groups of 8 physical lines. Groups with a blank
/// vehicle field, an incomplete numeric stream or a non physical orbit
/// are dropped and the line cursor still advances by one full group.
/// A malformed identification field aborts the whole process.
pub(crate) fn parse_record(content: &str) -> Result<Record, ParsingError> {
    let lines: Vec<&str> = content.lines().collect();

    let body = lines
        .iter()
        .position(|line| line.contains(HEADER_TERMINATION))
        .map(|index| &lines[index + 1..])
        .ok_or(ParsingError::MissingHeaderTermination)?;

    let mut record = Record::new();

    // fixed size groups: a trailing partial group is not an error
    for group in body.chunks_exact(LINES_PER_RECORD) {
        let line = group[0];

        let svnn = line.get(..3).unwrap_or(line).trim();
        if svnn.is_empty() {
            // unidentified group, dropped: lines are consumed regardless
            continue;
        }

        let sv =
            SV::from_str(svnn).map_err(|_| ParsingError::SvParsing(svnn.to_string()))?;

        let toc = parse_epoch_line(line)?;

        if sv.constellation != Constellation::GPS {
            debug!("{}: constellation not supported", sv);
            continue;
        }

        let entry = record.entry(sv).or_default();

        let tokens = scan_numbers(group);
        match Ephemeris::from_tokens(toc, &tokens) {
            Some(ephemeris) => entry.push(ephemeris),
            None => {
                debug!("{}: dropped record ({} numeric fields)", sv, tokens.len());
            },
        }
    }

    Ok(record)
}

/// Strict column slicing of the identification fields:
/// calendar time of clock, published right after the vehicle field.
fn parse_epoch_line(line: &str) -> Result<Toc, ParsingError> {
    let year = field(line, 3, 8).ok_or(ParsingError::EpochLineTooShort)?;
    let month = field(line, 8, 11).ok_or(ParsingError::EpochLineTooShort)?;
    let day = field(line, 11, 14).ok_or(ParsingError::EpochLineTooShort)?;
    let hour = field(line, 14, 17).ok_or(ParsingError::EpochLineTooShort)?;
    let minute = field(line, 17, 20).ok_or(ParsingError::EpochLineTooShort)?;
    let second = field(line, 20, 23).ok_or(ParsingError::EpochLineTooShort)?;

    Ok(Toc {
        year: year
            .parse::<i32>()
            .map_err(|_| ParsingError::YearField(year.to_string()))?,
        month: month
            .parse::<u8>()
            .map_err(|_| ParsingError::MonthField(month.to_string()))?,
        day: day
            .parse::<u8>()
            .map_err(|_| ParsingError::DayField(day.to_string()))?,
        hour: hour
            .parse::<u8>()
            .map_err(|_| ParsingError::HoursField(hour.to_string()))?,
        minute: minute
            .parse::<u8>()
            .map_err(|_| ParsingError::MinutesField(minute.to_string()))?,
        second: second
            .parse::<f64>()
            .map_err(|_| ParsingError::SecondsField(second.to_string()))?,
    })
}

fn field(line: &str, from: usize, to: usize) -> Option<&str> {
    Some(line.get(from..to)?.trim())
}

/// Free scan of one full group for FORTRAN style floating point
/// numbers, in reading order. The 'D' exponent marker is substituted
/// prior to interpretation.
fn scan_numbers(lines: &[&str]) -> Vec<f64> {
    let mut tokens = Vec::with_capacity(32);
    for line in lines {
        for matched in FORTRAN_FLOAT.find_iter(line) {
            if let Ok(value) = matched.as_str().replace('D', "E").parse::<f64>() {
                tokens.push(value);
            }
        }
    }
    tokens
}
