//! Concrete behaviour of each combinator on both variants.

use outcome_core::pipe::{and_then, failure, map, map_err, success, with_default};
use outcome_core::{Handlers, Outcome, Pipe};

#[test]
fn test_map_doubles_success() {
    let outcome: Outcome<i32, i32> = success(2);
    assert_eq!(outcome.pipe(map(|n: i32| n * 2)), Outcome::Success(4));
}

#[test]
fn test_map_leaves_failure_untouched() {
    let outcome: Outcome<i32, i32> = failure(2);
    assert_eq!(outcome.pipe(map(|n: i32| n * 2)), Outcome::Failure(2));
}

#[test]
fn test_map_err_appends_to_failure() {
    let outcome: Outcome<(), Vec<String>> = failure(vec!["error1".to_string()]);
    let appended = outcome.pipe(map_err(|mut m: Vec<String>| {
        m.push("error2".to_string());
        m
    }));
    assert_eq!(
        appended,
        Outcome::Failure(vec!["error1".to_string(), "error2".to_string()])
    );
}

#[test]
fn test_map_err_leaves_success_untouched() {
    let outcome: Outcome<i32, Vec<String>> = success(1);
    assert_eq!(outcome.map_err(|m| m.len()), Outcome::Success(1));
}

#[test]
fn test_and_then_returns_failure_from_step() {
    let outcome: Outcome<&str, &str> = success("value");
    let chained = outcome.pipe(and_then(|_: &str| failure::<&str, &str>("failure")));
    assert_eq!(chained, Outcome::Failure("failure"));
}

#[test]
fn test_and_then_keeps_original_failure() {
    let outcome: Outcome<&str, &str> = failure("failure");
    let chained = outcome.pipe(and_then(|_: &str| success::<&str, &str>("success")));
    assert_eq!(chained, Outcome::Failure("failure"));
}

#[test]
fn test_and_then_returns_step_success() {
    let outcome: Outcome<&str, &str> = success("value");
    let chained = outcome.pipe(and_then(|_: &str| success::<&str, &str>("success")));
    assert_eq!(chained, Outcome::Success("success"));
}

#[test]
fn test_with_default() {
    let defaulter = with_default("default");
    assert_eq!(defaulter(failure::<&str, &str>("error")), "default");
    assert_eq!(defaulter(success("x")), "x");
}

#[test]
fn test_match_with_formats_each_variant() {
    let describe = |outcome: Outcome<i32, String>| {
        outcome.match_with(Handlers::new(
            |n| format!("The number is {n}"),
            |m| format!("An error occurred: {m}"),
        ))
    };
    assert_eq!(describe(success(5)), "The number is 5");
    assert_eq!(
        describe(failure("oh dear".to_string())),
        "An error occurred: oh dear"
    );
}
