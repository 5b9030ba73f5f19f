use tutor::error::{CalculationError, ToolExecutionError};
use tutor::tools::calculator::{evaluate, extract_expressions};
use tutor::tools::{format_value, CalculatorTool, Tool};

fn value(expr: &str) -> f64 {
    evaluate(expr).unwrap().result
}

#[test]
fn test_precedence_and_parentheses() {
    assert_eq!(value("2+3*4"), 14.0);
    assert_eq!(value("(2+3)*4"), 20.0);
    assert_eq!(value("10-4-3"), 3.0);
    assert_eq!(value("100/10/5"), 2.0);
    assert_eq!(value("2*(3+(4-1))/3"), 4.0);
}

#[test]
fn test_decimals_and_unary_sign() {
    assert_eq!(value("1.5*2"), 3.0);
    assert_eq!(value(".5+.25"), 0.75);
    assert_eq!(value("-3+5"), 2.0);
    assert_eq!(value("2*-3"), -6.0);
    assert_eq!(value("-(2+3)"), -5.0);
}

#[test]
fn test_whitespace_and_noise_are_stripped() {
    assert_eq!(value(" 2 + 2 "), 4.0);
    assert_eq!(value("2 apples + 3"), 5.0);

    let calc = evaluate(" 7 * 6 ").unwrap();
    assert_eq!(calc.expression, " 7 * 6 ");
    assert_eq!(calc.result, 42.0);
}

#[test]
fn test_non_finite_results_are_rejected() {
    assert_eq!(evaluate("5/0"), Err(CalculationError::NonFinite));
    assert_eq!(evaluate("0/0"), Err(CalculationError::NonFinite));
    assert_eq!(evaluate("1/(2-2)"), Err(CalculationError::NonFinite));
}

#[test]
fn test_malformed_expressions_are_rejected() {
    assert_eq!(evaluate(""), Err(CalculationError::Empty));
    assert_eq!(evaluate("hello"), Err(CalculationError::Empty));
    assert_eq!(evaluate("2+"), Err(CalculationError::UnexpectedEnd));
    assert_eq!(evaluate("(2+3"), Err(CalculationError::UnbalancedParentheses));
    assert_eq!(evaluate("2+3)"), Err(CalculationError::UnbalancedParentheses));
    assert!(matches!(evaluate("*2"), Err(CalculationError::UnexpectedToken { found: '*', .. })));
    assert!(evaluate("2(3)").is_err());
}

#[test]
fn test_evaluation_is_idempotent() {
    for expr in ["2+3*4", "5/0", "(1.5+2.5)/8"] {
        assert_eq!(evaluate(expr), evaluate(expr));
    }
}

#[test]
fn test_extract_binary_operations() {
    assert_eq!(extract_expressions("add 3 + 4 then 2.5*2"), vec!["3 + 4", "2.5*2"]);
}

#[test]
fn test_extract_after_keywords() {
    assert_eq!(extract_expressions("Please calculate (1+2)*3"), vec!["1+2", "(1+2)*3"]);
    assert_eq!(extract_expressions("What is 2+2?"), vec!["2+2", "2+2"]);
    assert_eq!(extract_expressions("CALCULATE 12 / 4 please"), vec!["12 / 4", "12 / 4 "]);
}

#[test]
fn test_extract_keeps_captures_verbatim() {
    assert_eq!(extract_expressions("What is  the area of a circle?"), vec![" "]);
    assert_eq!(extract_expressions("calculate 2 + 2 now"), vec!["2 + 2", "2 + 2 "]);
    assert_eq!(evaluate(" "), Err(CalculationError::Empty));
}

#[test]
fn test_results_share_constant_formatting() {
    assert_eq!(format_value(4.0), "4");
    assert_eq!(format_value(0.75), "0.75");
    assert_eq!(format_value(1e-8), "1e-8");
    assert_eq!(format_value(1e21), "1e21");
}

#[test]
fn test_extract_nothing_from_plain_text() {
    assert!(extract_expressions("What is the derivative of x squared?").is_empty());
    assert!(extract_expressions("").is_empty());
}

#[test]
fn test_tool_wraps_calculation_errors() {
    let calc = CalculatorTool::new();
    assert_eq!(calc.execute("6*7").unwrap().result, 42.0);
    assert_eq!(
        calc.execute("1/0"),
        Err(ToolExecutionError::Calculation(CalculationError::NonFinite))
    );
    assert_eq!(calc.name(), "calculator");
}
