//! Example: Composing matchers
//!
//! This example builds matcher trees from leaves and combinators, runs them
//! against values and prints the failure messages a test would show.

use testkit_match::engine::MessageFormat;
use testkit_match::prelude::*;

fn main() {
    println!("🧩 testkit-match - Composition Examples\n");

    example_leaves();
    example_combinators();
    example_quantifiers();
    example_dynamic_values();
    example_custom_labels();

    println!("\n✅ All composition examples completed!");
}

fn report<T, M>(matcher: &M, value: &T)
where
    T: std::fmt::Debug + ?Sized,
    M: Matcher<T> + ?Sized,
{
    match run_match(matcher, value) {
        MatchResult::Pass => println!("   {value:?} ✅ {}", matcher.describe()),
        MatchResult::Fail(mismatch) => {
            println!("   {value:?} ❌");
            for line in mismatch.to_string().lines().skip(1) {
                println!("      {line}");
            }
        }
    }
}

/// Leaf matchers on plain values
fn example_leaves() {
    println!("📌 Example 1: Leaves");

    report(&equals(1), &1);
    report(&equals(1), &2);
    report(&has_count(2), &vec![1]);
    report(&is_string(), &42);
    println!();
}

/// Logical combinators
fn example_combinators() {
    println!("📌 Example 2: Combinators");

    let in_range = all_of![greater(0), less_or_equal(10)];
    report(&in_range, &5);
    report(&in_range, &11);

    let small_or_huge = any_of![less(3), greater(1000)];
    report(&small_or_huge, &50);

    report(&not(equals(2)), &1);
    println!();
}

/// Quantifiers over sequences
fn example_quantifiers() {
    println!("📌 Example 3: Quantifiers");

    let all_positive = every(greater(0));
    report(&all_positive, &vec![1, 2, 3]);
    report(&all_positive, &vec![1, -2, 3]);

    let has_seven = some(equals(7));
    report(&has_seven, &Vec::new());
    println!();
}

/// Matching dynamic values
fn example_dynamic_values() {
    println!("📌 Example 4: Dynamic values");

    let status = Value::keyword("shipped");
    report(&any_of![equals(Value::keyword("pending")), is_nil()], &status);
    report(&instance_of(Kind::Keyword), &status);
    println!();
}

/// Custom message labels
fn example_custom_labels() {
    println!("📌 Example 5: Custom labels");

    if let MatchResult::Fail(mismatch) = run_match(&equals("ok"), &"error") {
        let text = MessageFormat::default()
            .with_expected_label("wanted:")
            .with_was_label("got:")
            .format(&mismatch);
        println!("{text}");
    }
}
