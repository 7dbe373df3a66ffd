//! Batch conversion of SVY21 points stored as CSV.
//!
//! The input has a header row, the northing (`Y`) in the first column and the
//! easting (`X`) in the second; extra columns are ignored. The output has a
//! `Y,X` header followed by one latitude,longitude row per input row.

use std::io::{Read, Write};

use log::debug;

use crate::{Error, ProjectionConstants};

fn parse_field(
    record: &csv::StringRecord,
    row: usize,
    idx: usize,
    name: &str,
) -> Result<f64, Error> {
    let field = record.get(idx).ok_or_else(|| Error::InvalidRecord {
        row,
        msg: format!("missing {name} column"),
    })?;

    field.trim().parse().map_err(|e| Error::InvalidRecord {
        row,
        msg: format!("{name} '{field}': {e}"),
    })
}

/// Converts every SVY21 row of `reader` to latitude/longitude and writes the
/// result to `writer`. Returns the number of converted rows.
///
/// # Errors
///
/// Returns [`Error::Csv`] if the CSV cannot be read or written, or
/// [`Error::InvalidRecord`] if a row is missing a column or holds something
/// other than a number.
///
/// # Usage
///
/// ```
/// use svy21::{batch::convert_csv, SVY21};
///
/// let input = "y_coord,x_coord\n38744.572,28001.642\n";
/// let mut out = Vec::new();
///
/// let count = convert_csv(input.as_bytes(), &mut out, &SVY21).unwrap();
///
/// assert_eq!(count, 1);
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.starts_with("Y,X"));
/// assert!(out.contains("1.36666"));
/// ```
pub fn convert_csv<R, W>(
    reader: R,
    writer: W,
    constants: &ProjectionConstants,
) -> Result<usize, Error>
where
    R: Read,
    W: Write,
{
    let mut reader = csv::Reader::from_reader(reader);
    let mut writer = csv::Writer::from_writer(writer);

    // Y is latitude, X is longitude
    writer.write_record(["Y", "X"])?;

    let mut count = 0;
    for record in reader.records() {
        let record = record?;
        // Row 1 is the header
        let row = count + 2;
        let northing = parse_field(&record, row, 0, "northing")?;
        let easting = parse_field(&record, row, 1, "easting")?;

        let coord = constants.to_geodetic(northing, easting);
        writer.write_record([coord.latitude().to_string(), coord.longitude().to_string()])?;
        count += 1;
    }

    writer.flush()?;
    debug!("Converted {count} SVY21 rows");

    Ok(count)
}
