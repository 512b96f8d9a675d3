use super::test_harness::{ViewKind, render_session, setup_view_harness};
use crate::vm::test_support::builtin_session;

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, "Grammar Drill");
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Grammar Drill"), "missing title in {html}");
    assert!(html.contains(r#"id="quiz-root""#), "missing focus root in {html}");
    assert!(html.contains("Progress: 1 / 10"), "missing progress in {html}");
    assert!(html.contains("tired, she still finished the report."), "missing sentence in {html}");
    for option in ["Although", "Because", "Unless", "Despite"] {
        assert!(html.contains(option), "missing {option} in {html}");
    }
    assert!(html.contains("Submit answer"), "missing submit in {html}");
    assert!(html.contains("______"), "missing blank in {html}");
}

#[test]
fn question_card_smoke_renders_feedback_after_wrong_answer() {
    let mut session = builtin_session();
    session.select_option("Because").unwrap();
    session.submit_answer().unwrap();

    let html = render_session(&session);
    assert!(html.contains("Not quite"), "missing headline in {html}");
    assert!(html.contains("Grammar rule"), "missing rule label in {html}");
    assert!(html.contains("Although it was raining, we went out."), "missing example in {html}");
    assert!(html.contains("quiz-option--incorrect"), "missing incorrect option in {html}");
    assert!(html.contains("quiz-option--correct"), "missing correct option in {html}");
    assert!(html.contains("quiz-option--dimmed"), "missing dimmed option in {html}");
    assert!(html.contains("Next question"), "missing advance in {html}");
    assert!(!html.contains("Submit answer"), "submit still shown in {html}");
}

#[test]
fn question_card_smoke_renders_correct_feedback() {
    let mut session = builtin_session();
    session.select_option("Although").unwrap();
    session.submit_answer().unwrap();

    let html = render_session(&session);
    assert!(html.contains("Correct!"), "missing headline in {html}");
    assert!(html.contains("quiz-blank--correct"), "missing blank tone in {html}");
}

#[test]
fn summary_card_smoke_renders_score_and_message() {
    let mut session = builtin_session();
    while !session.state().is_finished() {
        let index = session.state().current_index();
        let question = session.current_question().clone();
        let choice = if index < 6 {
            question.correct_answer().to_string()
        } else {
            question
                .options()
                .iter()
                .find(|option| !question.is_correct(option))
                .cloned()
                .unwrap()
        };
        session.select_option(choice).unwrap();
        session.submit_answer().unwrap();
        session.advance().unwrap();
    }

    let html = render_session(&session);
    assert!(html.contains("Practice complete"), "missing title in {html}");
    assert!(html.contains("6/10"), "missing score in {html}");
    assert!(html.contains("60%"), "missing percentage in {html}");
    assert!(html.contains("Nice work!"), "missing tier message in {html}");
    assert!(html.contains("Practice again"), "missing restart in {html}");
    assert!(html.contains(r#"id="quiz-restart""#), "missing restart id in {html}");
}
