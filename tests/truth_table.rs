use std::fs;

use test_log::test;

use petrick_rs::error::{Error, ErrorKind};
use petrick_rs::eval::verify;
use petrick_rs::reduce::reduce;
use petrick_rs::render::RenderConfig;
use petrick_rs::truth_table::TruthTable;

// Full adder: inputs a b cin, outputs sum and carry
const FULL_ADDER: &str = "\
# a b cin | s cout
0 0 0 | 0 0
0 0 1 | 1 0
0 1 0 | 1 0
0 1 1 | 0 1
1 0 0 | 1 0
1 0 1 | 0 1
1 1 0 | 0 1
1 1 1 | 1 1
";

#[test]
fn test_full_adder() {
    let table = TruthTable::parse(FULL_ADDER).unwrap();
    assert_eq!(table.width, 3);
    assert_eq!(table.columns[0].minterms, vec![1, 2, 4, 7]);
    assert_eq!(table.columns[1].minterms, vec![3, 5, 6, 7]);

    let config = RenderConfig::default();
    let lines: Vec<String> = table
        .functions()
        .into_iter()
        .map(|f| {
            let mut f = f.unwrap();
            let r = reduce(&mut f).unwrap();
            assert_eq!(verify(&r.cover, &f), Ok(()));
            r.line(&config)
        })
        .collect();

    // The sum bit does not simplify at all: four 3-literal terms
    assert_eq!(
        lines[0],
        "Q0: a'b'c + a'bc' + ab'c' + abc  Number of operations: 17"
    );
    // Majority: three 2-literal terms
    assert_eq!(lines[1], "Q1: bc + ac + ab  Number of operations: 5");
}

#[test]
fn test_dont_care_rows() {
    let table = TruthTable::parse("0 0 | 1\n0 1 | x\n1 x | 0\n").unwrap();
    let mut f = table.functions().pop().unwrap().unwrap();
    let r = reduce(&mut f).unwrap();
    assert_eq!(r.line(&RenderConfig::default()), "Q0: a'  Number of operations: 1");
}

#[test]
fn test_failing_column_does_not_stop_others() {
    let table = TruthTable::parse("0 | 1 1\nx | x 0\n").unwrap();
    let results: Vec<_> = table.functions().into_iter().map(|f| f.and_then(|mut f| reduce(&mut f))).collect();
    assert!(matches!(results[0], Err(Error::ConflictingAssignment(0))));
    let second = results[1].as_ref().unwrap();
    assert_eq!(second.cover.to_string(), "a'");
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("petrick-rs-{}.txt", std::process::id()));
    fs::write(&path, FULL_ADDER).unwrap();
    let table = TruthTable::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(table, TruthTable::parse(FULL_ADDER).unwrap());
}

#[test]
fn test_load_missing_file() {
    let err = TruthTable::load("/definitely/not/here.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(err.to_string().contains("here.txt"));
}
