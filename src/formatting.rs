//! Tabular formatting of position solutions.
use crate::navigation::PositionSample;

use std::io::{BufWriter, Write};

/// Formats position solutions as tabular rows, one per sample,
/// for the row oriented file writers: a `t_gps,x,y,z` header row,
/// the sampling epoch with 11 fractional digits, raw ECEF values.
pub fn write_csv<W: Write>(writer: &mut BufWriter<W>, samples: &[PositionSample]) -> std::io::Result<()> {
    writeln!(writer, "t_gps,x,y,z")?;
    for sample in samples {
        writeln!(
            writer,
            "{:.11},{},{},{}",
            sample.epoch, sample.x_m, sample.y_m, sample.z_m
        )?;
    }
    Ok(())
}
