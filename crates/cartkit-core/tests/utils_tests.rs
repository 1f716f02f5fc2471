//! Helper functions through the public call surface.

use cartkit_core::utils::{
    capitalize, divide, get_max, get_max_of, is_palindrome, sum, validate_email, Operand,
};
use cartkit_core::CoreError;

fn number(op: Operand) -> f64 {
    op.as_number().expect("expected a number")
}

// =============================================================================
// sum
// =============================================================================

#[test]
fn sum_integers() {
    assert_eq!(number(sum(2, 3)), 5.0);
    assert_eq!(number(sum(-2, -3)), -5.0);
    assert_eq!(number(sum(5, -3)), 2.0);
    assert_eq!(number(sum(5, 0)), 5.0);
}

#[test]
fn sum_decimals() {
    assert_eq!(number(sum(1.5, 2.5)), 4.0);
    assert_eq!(number(sum(1.5, 3)), 4.5);
    assert_eq!(number(sum(5, 2.3)), 7.3);
    assert_eq!(number(sum(-2.5, -3.5)), -6.0);
    assert_eq!(number(sum(-5.5, 3.5)), -2.0);
    assert!((number(sum(0.1, 0.2)) - 0.3).abs() < 1e-12);
}

#[test]
fn sum_large_numbers() {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    assert_eq!(number(sum(1e10, 1e10)), 2e10);
    assert_eq!(number(sum(MAX_SAFE_INTEGER, 1)), MAX_SAFE_INTEGER + 1.0);
    assert_eq!(number(sum(1e20, 1e20)), 2e20);
}

#[test]
fn sum_infinities_and_nan() {
    assert_eq!(number(sum(f64::INFINITY, 5)), f64::INFINITY);
    assert_eq!(number(sum(f64::NEG_INFINITY, 5)), f64::NEG_INFINITY);
    assert!(sum(f64::INFINITY, f64::NEG_INFINITY).is_nan());
    assert!(sum(f64::NAN, 5).is_nan());
    assert!(sum(5, f64::NAN).is_nan());
}

#[test]
fn sum_overflows_to_infinity() {
    assert_eq!(number(sum(f64::MAX, f64::MAX)), f64::INFINITY);
    assert_eq!(number(sum(-f64::MAX, -f64::MAX)), f64::NEG_INFINITY);
}

#[test]
fn sum_coerces_non_numbers() {
    assert_eq!(sum("5", 3), Operand::Text("53".to_string()));
    assert_eq!(sum(3, "5"), Operand::Text("35".to_string()));
    assert_eq!(sum("hello", "world"), Operand::Text("helloworld".to_string()));
    assert_eq!(sum(1.5, "x"), Operand::Text("1.5x".to_string()));
    assert_eq!(number(sum(true, 1)), 2.0);
    assert_eq!(number(sum(false, 5)), 5.0);
    assert_eq!(number(sum(Operand::Null, 5)), 5.0);
    assert!(sum(Operand::Undefined, 5).is_nan());
}

// =============================================================================
// is_palindrome
// =============================================================================

#[test]
fn palindromes() {
    assert!(is_palindrome("radar"));
    assert!(is_palindrome("Radar"));
    assert!(is_palindrome("RaceCar"));
    assert!(is_palindrome("A man a plan a canal Panama"));
    assert!(is_palindrome("A Santa at NASA"));
    assert!(is_palindrome(""));
    assert!(is_palindrome("a"));
}

#[test]
fn non_palindromes() {
    assert!(!is_palindrome("hello"));
    assert!(!is_palindrome("race a car"));
}

// =============================================================================
// get_max
// =============================================================================

#[test]
fn get_max_values() {
    assert_eq!(get_max(&[1.0, 3.0, 2.0, 5.0, 4.0]), Some(5.0));
    assert_eq!(get_max(&[-1.0, -3.0, -2.0, -5.0, -4.0]), Some(-1.0));
    assert_eq!(get_max(&[-1.0, 3.0, -2.0, 5.0, -4.0]), Some(5.0));
    assert_eq!(get_max(&[42.0]), Some(42.0));
    assert_eq!(get_max(&[1.5, 2.7, 1.2, 3.1]), Some(3.1));
}

#[test]
fn get_max_empty_is_none() {
    assert_eq!(get_max(&[]), None);
}

#[test]
fn get_max_of_non_sequence_is_none() {
    assert_eq!(get_max_of(&Operand::Null), None);
    assert_eq!(get_max_of(&Operand::Undefined), None);
    assert_eq!(get_max_of(&"not an array".into()), None);
    assert_eq!(get_max_of(&123.into()), None);
    assert_eq!(get_max_of(&vec![1.0, 3.0, 2.0].into()), Some(3.0));
    assert_eq!(get_max_of(&Vec::<f64>::new().into()), None);
}

// =============================================================================
// capitalize
// =============================================================================

#[test]
fn capitalize_words() {
    assert_eq!(capitalize("hello"), "Hello");
    assert_eq!(capitalize("HELLO"), "Hello");
    assert_eq!(capitalize("hELLO"), "Hello");
    assert_eq!(capitalize("a"), "A");
    assert_eq!(capitalize("A"), "A");
    assert_eq!(capitalize("hello world"), "Hello world");
}

#[test]
fn capitalize_empty_or_absent() {
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize(None), "");
}

#[test]
fn capitalize_leading_symbol() {
    assert_eq!(capitalize("123abc"), "123abc");
    assert_eq!(capitalize("!hello"), "!hello");
}

// =============================================================================
// divide
// =============================================================================

#[test]
fn divide_values() {
    assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
    assert_eq!(divide(7.5, 2.5).unwrap(), 3.0);
    assert_eq!(divide(10.0, -2.0).unwrap(), -5.0);
    assert_eq!(divide(-10.0, 2.0).unwrap(), -5.0);
    assert_eq!(divide(-10.0, -2.0).unwrap(), 5.0);
    assert_eq!(divide(0.0, 5.0).unwrap(), 0.0);
    assert_eq!(divide(7.0, 2.0).unwrap(), 3.5);
}

#[test]
fn divide_by_zero_fails() {
    for dividend in [4.0, -4.0, 0.0] {
        let err = divide(dividend, 0.0).unwrap_err();
        assert_eq!(err, CoreError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero");
    }
}

// =============================================================================
// validate_email
// =============================================================================

#[test]
fn email_accepts_valid_addresses() {
    for email in [
        "test@example.com",
        "user123@domain123.com",
        "user.name+tag@example.com",
        "user_name@example.com",
        "user-name@example.com",
        "user%test@example.com",
        "user@mail.example.com",
        "user@example.info",
        "user@example.museum",
        "a@b.co",
        "test@domain.org",
        "user@ex-ample.com",
        "user@mail-server.example.com",
        "user@123domain.com",
    ] {
        assert!(validate_email(email), "{email} should be valid");
    }
}

#[test]
fn email_requires_exactly_one_at() {
    for email in [
        "userexample.com",
        "user.example.com",
        "plaintext",
        "user@@example.com",
        "user@ex@ample.com",
        "user@example@.com",
        "@user@example.com",
        "user@example.com@",
        "user@@@example.com",
        "@@@",
        "user@domain@subdomain.com",
    ] {
        assert!(!validate_email(email), "{email} should be rejected");
    }
}

#[test]
fn email_rejects_missing_parts() {
    assert!(!validate_email("@example.com"));
    assert!(!validate_email("user@"));
    assert!(!validate_email("user@example"));
    assert!(!validate_email("user@example.c"));
}

#[test]
fn email_blank_or_absent() {
    assert!(!validate_email(""));
    assert!(!validate_email("   "));
    assert!(!validate_email(None));
}

#[test]
fn email_whitespace_handling() {
    assert!(validate_email("  user@example.com  "));
    assert!(validate_email("\tuser@example.com\n"));
    assert!(!validate_email("user name@example.com"));
    assert!(!validate_email("user@exam ple.com"));
}

#[test]
fn email_local_part_dots() {
    assert!(!validate_email(".user@example.com"));
    assert!(!validate_email("user.@example.com"));
    assert!(!validate_email("user..name@example.com"));
    assert!(!validate_email("user...test@example.com"));
}

#[test]
fn email_domain_labels() {
    for email in [
        "user@-example.com",
        "user@example-.com",
        "user@example.-com",
        "user@example.com-",
        "user@example..com",
        "user@.example.com",
        "user@example.com.",
    ] {
        assert!(!validate_email(email), "{email} should be rejected");
    }
}

#[test]
fn email_length_limits() {
    let max_local = format!("{}@example.com", "a".repeat(64));
    assert!(validate_email(max_local.as_str()));

    let long_local = format!("{}@example.com", "a".repeat(65));
    assert!(!validate_email(long_local.as_str()));

    let long_domain = format!("user@{}.com", "a".repeat(250));
    assert!(!validate_email(long_domain.as_str()));
}

#[test]
fn email_rejects_forbidden_characters() {
    for email in [
        "user@exam<>ple.com",
        "user@exam[]ple.com",
        "user@exam()ple.com",
        "user@exam,ple.com",
        "user@exam;ple.com",
    ] {
        assert!(!validate_email(email), "{email} should be rejected");
    }
}
