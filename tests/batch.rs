use approx::assert_abs_diff_eq;
use svy21::{batch::convert_csv, Error, SVY21};

const TOLERANCE_LATLON: f64 = 1e-10;

fn convert(input: &str) -> Result<(usize, Vec<Vec<String>>), Error> {
    let mut out = Vec::new();
    let count = convert_csv(input.as_bytes(), &mut out, &SVY21)?;

    let rows = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(out.as_slice())
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect();

    Ok((count, rows))
}

#[test]
fn converts_reference_points() {
    let input = "\
y_coord,x_coord
39105.269,30629.967
36307.704,16272.970
48187.789, 27720.130
";
    let (count, rows) = convert(input).unwrap();

    assert_eq!(count, 3);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], ["Y", "X"]);

    let expected = [
        (1.3699278977737488, 103.85695034976466),
        (1.3446255443241177, 103.72794378041792),
        (1.4520670518379692, 103.83080332777138),
    ];
    for (row, (lat, lon)) in rows[1..].iter().zip(expected) {
        assert_eq!(row.len(), 2);
        assert_abs_diff_eq!(row[0].parse::<f64>().unwrap(), lat, epsilon = TOLERANCE_LATLON);
        assert_abs_diff_eq!(row[1].parse::<f64>().unwrap(), lon, epsilon = TOLERANCE_LATLON);
    }
}

#[test]
fn northing_is_the_first_column() {
    // Swapping the columns moves the point far from Singapore
    let (_, rows) = convert("y,x\n28001.642,38744.572\n").unwrap();
    let lat = rows[1][0].parse::<f64>().unwrap();

    assert!((lat - 1.366666).abs() > 0.05);
}

#[test]
fn extra_columns_are_ignored() {
    let (count, rows) = convert("y,x,name\n38744.572,28001.642,origin\n").unwrap();

    assert_eq!(count, 1);
    assert_abs_diff_eq!(rows[1][0].parse::<f64>().unwrap(), 1.366666, epsilon = TOLERANCE_LATLON);
    assert_abs_diff_eq!(rows[1][1].parse::<f64>().unwrap(), 103.833333, epsilon = TOLERANCE_LATLON);
}

#[test]
fn header_only_writes_header() {
    let (count, rows) = convert("y,x\n").unwrap();

    assert_eq!(count, 0);
    assert_eq!(rows, [["Y", "X"]]);
}

#[test]
fn invalid_rows() {
    let err = convert("y,x\n38744.572,28001.642\n38744.572,east\n").unwrap_err();
    assert!(matches!(err, Error::InvalidRecord { row: 3, .. }), "{err}");

    let err = convert("y\n38744.572\n").unwrap_err();
    assert!(matches!(err, Error::InvalidRecord { row: 2, .. }), "{err}");

    // Rows must have as many fields as the header
    let err = convert("y,x\n38744.572\n").unwrap_err();
    assert!(matches!(err, Error::Csv(_)), "{err}");
}
