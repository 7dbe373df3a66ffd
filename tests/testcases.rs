use std::{fs::File, io::BufReader};

use svy21::{
    testcase::{run_cases, Direction, TestCase},
    utility::fequals,
    Error, SVY21,
};

#[test]
fn reference_cases_pass() {
    let file = File::open("./tests/data/testcases.txt").unwrap();
    let mut out = Vec::new();

    let summary = run_cases(BufReader::new(file), &mut out, &SVY21).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(summary.cases, 8, "{out}");
    assert!(summary.all_passed(), "{out}");
    assert!(out.lines().next().unwrap().starts_with("Line 6: pass"));
    assert_eq!(out.lines().last().unwrap(), "Test complete. 8 / 8 passed, with 0 failures.");
}

#[test]
fn millimeter_reference_values_fail_at_nanometer_precision() {
    // Survey values only carry three decimals, the projection does not
    // reproduce them to 1e-9.
    let input = "0,1.3699278977737488,103.85695034976466,39105.269,30629.967\n";
    let mut out = Vec::new();

    let summary = run_cases(input.as_bytes(), &mut out, &SVY21).unwrap();

    assert_eq!(summary.cases, 1);
    assert_eq!(summary.failures, 1);
    assert_eq!(summary.passed(), 0);
    assert!(String::from_utf8(out).unwrap().starts_with(
        "Line 1: FAIL. Expected: (39105.269000, 30629.967000) \
         Got: (39105.269000, 30629.967000)"
    ));
}

#[test]
fn direction_parsing() {
    let case = TestCase::parse(1, "0,1,2,3,4").unwrap().unwrap();
    assert_eq!(case.direction, Direction::ToSvy21);

    let case = TestCase::parse(1, "2,1,2,3,4").unwrap().unwrap();
    assert_eq!(case.direction, Direction::ToLatLon);

    let case = TestCase::parse(1, "-1,1,2,3,4").unwrap().unwrap();
    assert_eq!(case.direction, Direction::ToLatLon);
}

#[test]
fn malformed_cases() {
    assert!(TestCase::parse(1, "").unwrap().is_none());
    assert!(TestCase::parse(1, "   ").unwrap().is_none());
    assert!(TestCase::parse(1, "  # 0,1,2,3,4").unwrap().is_none());
    assert!(TestCase::parse(1, "0,1,2,3,4,5").unwrap().is_none());

    let err = TestCase::parse(7, "0,1,two,3,4").unwrap_err();
    assert!(matches!(err, Error::InvalidTestCase { line: 7, .. }));

    let err = TestCase::parse(8, "0.5,1,2,3,4").unwrap_err();
    assert!(matches!(err, Error::InvalidTestCase { line: 8, .. }));

    let mut out = Vec::new();
    assert!(run_cases("0,1,2,3,x\n".as_bytes(), &mut out, &SVY21).is_err());
}

#[test]
fn non_finite_results_fail() {
    let input = "\
1,NaN,NaN,0,0
1,inf,28001.642,1.366666,103.833333
0,NaN,103.833333,NaN,NaN
";
    let mut out = Vec::new();

    let summary = run_cases(input.as_bytes(), &mut out, &SVY21).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(summary.cases, 3, "{out}");
    assert_eq!(summary.failures, 3, "{out}");
    assert!(out.lines().all(|line| !line.contains(": pass")), "{out}");
    assert_eq!(out.lines().last().unwrap(), "Test complete. 0 / 3 passed, with 3 failures.");
}

#[test]
fn fequals_rejects_unscalable_values() {
    assert!(!fequals(f64::NAN, 0.));
    assert!(!fequals(0., f64::NAN));
    assert!(!fequals(f64::NAN, f64::NAN));
    assert!(!fequals(f64::INFINITY, f64::INFINITY));
    assert!(!fequals(f64::NEG_INFINITY, 0.));

    // Beyond i64 once scaled by 1e9
    assert!(!fequals(1e10, 2e10));
    assert!(!fequals(1e10, 1e10));
    assert!(!fequals(-1e10, -2e10));

    // Opposite ends of the i64 range must not overflow the difference
    assert!(!fequals(9e9, -9e9));

    assert!(fequals(9e9, 9e9));
    assert!(fequals(-38744.572, -38744.572));
}
