//! Runner for delimited conversion test cases.
//!
//! Each line holds `direction,input1,input2,expected1,expected2`. A direction of
//! `0` converts lat/lon to SVY21, anything else converts SVY21 to lat/lon. Blank
//! lines and lines starting with `#` are ignored, as are lines that do not
//! have exactly five fields.

use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use log::{trace, warn};

use crate::{utility::fequals, Error, ProjectionConstants};

const COMMENT: &str = "#";
const DELIMITER: char = ',';
const TC_LENGTH: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Latitude/longitude to northing/easting
    ToSvy21,
    /// Northing/easting to latitude/longitude
    ToLatLon,
}

impl From<i32> for Direction {
    fn from(value: i32) -> Self {
        if value == 0 {
            Direction::ToSvy21
        } else {
            Direction::ToLatLon
        }
    }
}

/// A single parsed test case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TestCase {
    pub line: usize,
    pub direction: Direction,
    pub input: (f64, f64),
    pub expected: (f64, f64),
}

impl TestCase {
    /// Parses one line of input. Returns `Ok(None)` for lines that are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTestCase`] if a field of a five-field line is not
    /// a number.
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::testcase::{Direction, TestCase};
    ///
    /// let case = TestCase::parse(3, "1, 38744.572, 28001.642, 1.366666, 103.833333")
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// assert_eq!(case.line, 3);
    /// assert_eq!(case.direction, Direction::ToLatLon);
    /// assert_eq!(case.input, (38744.572, 28001.642));
    ///
    /// assert!(TestCase::parse(4, "# comment").unwrap().is_none());
    /// assert!(TestCase::parse(5, "0,1,2").unwrap().is_none());
    /// assert!(TestCase::parse(6, "x,1,2,3,4").is_err());
    /// ```
    pub fn parse(line: usize, text: &str) -> Result<Option<TestCase>, Error> {
        let text = text.trim();
        if text.is_empty() || text.starts_with(COMMENT) {
            return Ok(None);
        }

        let tokens = text.split(DELIMITER).map(str::trim).collect::<Vec<_>>();
        if tokens.len() != TC_LENGTH {
            warn!("Line {line}: expected {TC_LENGTH} fields, found {}; skipping", tokens.len());
            return Ok(None);
        }

        let direction = tokens[0]
            .parse::<i32>()
            .map_err(|e| Error::InvalidTestCase {
                line,
                msg: format!("direction '{}': {e}", tokens[0]),
            })?;

        let mut values = [0_f64; TC_LENGTH - 1];
        for (value, token) in values.iter_mut().zip(&tokens[1..]) {
            *value = token.parse().map_err(|e| Error::InvalidTestCase {
                line,
                msg: format!("value '{token}': {e}"),
            })?;
        }

        Ok(Some(TestCase {
            line,
            direction: direction.into(),
            input: (values[0], values[1]),
            expected: (values[2], values[3]),
        }))
    }

    /// Performs the conversion and compares it to the expected pair.
    pub fn run(&self, constants: &ProjectionConstants) -> CaseResult {
        let (input1, input2) = self.input;
        let got = match self.direction {
            Direction::ToSvy21 => {
                let coord = constants.to_projected(input1, input2);
                (coord.northing(), coord.easting())
            }
            Direction::ToLatLon => {
                let coord = constants.to_geodetic(input1, input2);
                (coord.latitude(), coord.longitude())
            }
        };

        let passed = fequals(got.0, self.expected.0) && fequals(got.1, self.expected.1);
        trace!(
            "Line {}: {:?} {:?} -> {:?} (passed: {passed})",
            self.line,
            self.direction,
            self.input,
            got,
        );

        CaseResult {
            line: self.line,
            expected: self.expected,
            got,
            passed,
        }
    }
}

/// Outcome of running one [`TestCase`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseResult {
    pub line: usize,
    pub expected: (f64, f64),
    pub got: (f64, f64),
    pub passed: bool,
}

impl Display for CaseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.passed {
            write!(f, "Line {}: pass", self.line)
        } else {
            write!(
                f,
                "Line {}: FAIL. Expected: ({:.6}, {:.6}) Got: ({:.6}, {:.6})",
                self.line, self.expected.0, self.expected.1, self.got.0, self.got.1,
            )
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub cases: usize,
    pub failures: usize,
}

impl Summary {
    pub fn passed(&self) -> usize {
        self.cases - self.failures
    }

    pub fn all_passed(&self) -> bool {
        self.failures == 0
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Test complete. {} / {} passed, with {} failures.",
            self.passed(),
            self.cases,
            self.failures,
        )
    }
}

/// Runs every test case from `reader`, writing one result line per case and
/// the summary to `out`.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading or writing fails, or
/// [`Error::InvalidTestCase`] on a malformed case.
///
/// # Usage
///
/// ```
/// use svy21::{testcase::run_cases, SVY21};
///
/// let input = "# origin\n1,38744.572,28001.642,1.366666,103.833333\n";
/// let mut out = Vec::new();
///
/// let summary = run_cases(input.as_bytes(), &mut out, &SVY21).unwrap();
///
/// assert_eq!(summary.cases, 1);
/// assert!(summary.all_passed());
/// assert!(String::from_utf8(out).unwrap().starts_with("Line 2: pass"));
/// ```
pub fn run_cases<R, W>(
    reader: R,
    mut out: W,
    constants: &ProjectionConstants,
) -> Result<Summary, Error>
where
    R: BufRead,
    W: Write,
{
    let mut summary = Summary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(case) = TestCase::parse(idx + 1, &line)? else {
            continue;
        };

        summary.cases += 1;
        let result = case.run(constants);
        if !result.passed {
            summary.failures += 1;
        }
        writeln!(out, "{result}")?;
    }

    writeln!(out, "{summary}")?;

    Ok(summary)
}
