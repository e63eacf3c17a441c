use legalease::application::services::{TextBudgets, bound_text};
use legalease::domain::TaskKind;

#[test]
fn given_text_within_budget_when_bounding_then_returns_input_unchanged() {
    let bounded = bound_text("short clause", 4000);

    assert_eq!(bounded.content, "short clause");
    assert!(!bounded.truncated);
}

#[test]
fn given_text_exactly_at_budget_when_bounding_then_not_truncated() {
    let text = "x".repeat(3000);

    let bounded = bound_text(&text, 3000);

    assert_eq!(bounded.content, text);
    assert!(!bounded.truncated);
}

#[test]
fn given_text_over_budget_when_bounding_then_keeps_prefix_of_budget_length() {
    let text = format!("{}{}", "a".repeat(4000), "TAIL");

    let bounded = bound_text(&text, 4000);

    assert_eq!(bounded.char_count(), 4000);
    assert_eq!(bounded.content, "a".repeat(4000));
    assert!(bounded.truncated);
}

#[test]
fn given_ten_thousand_chars_when_bounding_for_summary_then_keeps_first_three_thousand() {
    let text: String = (0..10_000).map(|i| if i % 2 == 0 { 'a' } else { 'b' }).collect();

    let bounded = bound_text(&text, 3000);

    assert_eq!(bounded.char_count(), 3000);
    assert!(text.starts_with(&bounded.content));
}

#[test]
fn given_multibyte_text_when_bounding_then_counts_characters() {
    let bounded = bound_text("§§§§§", 3);

    assert_eq!(bounded.content, "§§§");
    assert!(bounded.truncated);
}

#[test]
fn given_empty_text_when_bounding_then_returns_empty() {
    let bounded = bound_text("", 4000);

    assert!(bounded.content.is_empty());
    assert!(!bounded.truncated);
}

#[test]
fn given_zero_budget_when_bounding_non_empty_text_then_returns_empty() {
    let bounded = bound_text("anything", 0);

    assert!(bounded.content.is_empty());
    assert!(bounded.truncated);
}

#[test]
fn given_default_budgets_when_looking_up_tasks_then_explain_term_is_unbounded() {
    let budgets = TextBudgets::default();

    assert_eq!(budgets.for_task(TaskKind::Simplify), Some(4000));
    assert_eq!(budgets.for_task(TaskKind::Summarize), Some(3000));
    assert_eq!(budgets.for_task(TaskKind::ExplainTerm), None);
}
