use gnss::prelude::SV;
use thiserror::Error;

/// Errors that abort the parsing process entirely:
/// no partial database is ever returned.
#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("file comes without \"END OF HEADER\" marker")]
    MissingHeaderTermination,
    #[error("epoch line too short to describe a time of clock")]
    EpochLineTooShort,
    #[error("failed to identify sat vehicle from \"{0}\"")]
    SvParsing(String),
    #[error("failed to parse year field from \"{0}\"")]
    YearField(String),
    #[error("failed to parse month field from \"{0}\"")]
    MonthField(String),
    #[error("failed to parse day field from \"{0}\"")]
    DayField(String),
    #[error("failed to parse hours field from \"{0}\"")]
    HoursField(String),
    #[error("failed to parse minutes field from \"{0}\"")]
    MinutesField(String),
    #[error("failed to parse seconds field from \"{0}\"")]
    SecondsField(String),
}

/// Crate level errors. Satellite related variants always carry
/// the affected vehicle, so failures remain attributable.
#[derive(Debug, Error)]
pub enum Error {
    #[error("parsing error: {0}")]
    Parsing(#[from] ParsingError),
    #[error("i/o error: {0}")]
    IO(#[from] std::io::Error),
    #[error("\"{0}\" is not a valid sat vehicle descriptor")]
    SvFormat(String),
    #[error("unknown satellite {0}")]
    UnknownSatellite(SV),
    #[error("{0}: navigation record is empty")]
    NoEphemeris(SV),
    #[error("invalid time series specs")]
    BadTimeSeriesSpecs,
}
