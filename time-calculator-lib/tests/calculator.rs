use pretty_assertions::assert_eq;
use time_calculator::calculator::{error_message, TimeCalculator};
use time_calculator::interpreter::error::EvaluationError;
use time_calculator::interpreter::Strictness;

#[test]
fn working_week_is_summed_and_recorded_newest_first() {
    let mut calculator = TimeCalculator::default();

    for day in ["7:42", "7:42 + 8:03", "7:42 + 8:03 + 7:58 - 0:30"] {
        calculator.calculate(day).unwrap();
    }

    let entries: Vec<&str> = calculator.history().entries().collect();
    assert_eq!(
        entries,
        vec![
            "7:42 + 8:03 + 7:58 - 0:30 = 23:13",
            "7:42 + 8:03 = 15:45",
            "7:42 = 7:42",
        ]
    );
}

#[test]
fn history_keeps_the_ten_most_recent_results() {
    let mut calculator = TimeCalculator::default();

    for minutes in 1..=12 {
        calculator.calculate(&format!("0:{}", minutes)).unwrap();
    }

    let entries: Vec<&str> = calculator.history().entries().collect();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries.first(), Some(&"0:12 = 0:12"));
    assert_eq!(entries.last(), Some(&"0:3 = 0:03"));
}

#[test]
fn errors_are_reported_without_losing_history() {
    let mut calculator = TimeCalculator::default();
    calculator.calculate("1:30 * 2").unwrap();

    let empty = calculator.calculate("").unwrap_err();
    let malformed = calculator.calculate("(1:30 *").unwrap_err();

    assert_eq!(error_message(&empty), "Error: empty input");
    assert_eq!(
        malformed.downcast_ref::<EvaluationError>(),
        Some(&EvaluationError::MalformedExpression)
    );
    assert_eq!(
        calculator.history().entries().collect::<Vec<_>>(),
        vec!["1:30 * 2 = 3:00"]
    );
}

#[test]
fn strictness_decides_whether_unknown_characters_are_ignored() {
    let mut lenient = TimeCalculator::new(Strictness::Lenient);
    let mut strict = TimeCalculator::new(Strictness::Strict);

    let calculation = lenient.calculate("2h + 3h").unwrap();
    let error = strict.calculate("2h + 3h").unwrap_err();

    assert_eq!(calculation.formatted.hhmm, "5:00");
    assert_eq!(
        error.downcast_ref::<EvaluationError>(),
        Some(&EvaluationError::UnsupportedCharacter('h'))
    );
}

#[test]
fn deeply_nested_input_is_an_error_and_keeps_history() {
    let mut calculator = TimeCalculator::default();
    calculator.calculate("0:45").unwrap();
    let nested = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));

    let error = calculator.calculate(&nested).unwrap_err();
    let negated = calculator.calculate(&format!("{}1", "-".repeat(100_001))).unwrap();

    assert!(matches!(
        error.downcast_ref::<EvaluationError>(),
        Some(EvaluationError::NestingTooDeep(_))
    ));
    assert_eq!(negated.formatted.hhmm, "-1:00");
    assert_eq!(calculator.history().len(), 2);
}
