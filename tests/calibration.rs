//! End-to-end checks through the public library API

use bridge_repair::{
    CalibrationSolver, OperatorSet, ParseError, SolverConfig, SolverError, parse_equations,
    total_calibration,
};

const SAMPLE: &str = include_str!("../data/day7.txt");

#[test]
fn sample_totals_match_both_parts() {
    let part1 = total_calibration(SAMPLE, OperatorSet::AddMultiply);
    let part2 = total_calibration(SAMPLE, OperatorSet::AddMultiplyConcat);

    assert!(part1.is_ok() && part2.is_ok());
    if let (Ok(part1), Ok(part2)) = (part1, part2) {
        assert_eq!(part1.to_string(), "3749");
        assert_eq!(part2.to_string(), "11387");
    }
}

#[test]
fn malformed_line_aborts_without_total() {
    let input = format!("{}not an equation\n", SAMPLE);
    let result = total_calibration(&input, OperatorSet::AddMultiply);
    assert_eq!(
        result,
        Err(SolverError::ParseError(ParseError::MissingColon {
            line: 10,
            content: "not an equation".to_string(),
        }))
    );
}

#[test]
fn large_values_do_not_wrap() {
    // 10^12 * 10^12 = 10^24 overflows u64
    let input = "1000000000000000000000000: 1000000000000 1000000000000\n";
    let result = total_calibration(input, OperatorSet::AddMultiply);
    assert!(result.is_ok());
    if let Ok(total) = result {
        assert_eq!(total.to_string(), "1000000000000000000000000");
    }
}

#[test]
fn concat_reaches_beyond_u64() {
    let input = "1844674407370955161518446744073709551615: 18446744073709551615 18446744073709551615\n";
    let part1 = total_calibration(input, OperatorSet::AddMultiply);
    let part2 = total_calibration(input, OperatorSet::AddMultiplyConcat);
    assert!(matches!(part1, Ok(ref total) if total.to_string() == "0"));
    assert!(matches!(
        part2,
        Ok(ref total) if total.to_string() == "1844674407370955161518446744073709551615"
    ));
}

#[test]
fn operand_limit_is_enforced() {
    let equations = match parse_equations("1: 1 1 1 1 1\n") {
        Ok(equations) => equations,
        Err(e) => panic!("parse failed: {}", e),
    };
    let solver = CalibrationSolver::new(SolverConfig { max_operands: 4 });
    let result = solver.calibration_total(&equations, OperatorSet::AddMultiply);
    assert!(matches!(
        result,
        Err(SolverError::TooManyOperands {
            count: 5,
            max: 4,
            ..
        })
    ));
}
