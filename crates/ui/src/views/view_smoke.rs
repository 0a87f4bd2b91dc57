use quiz_core::model::Answer;
use services::QuestionBank;

use super::ViewState;
use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_bank};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_bank_overview() {
    let mut harness = setup_view_harness(ViewKind::Home, false);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Everyday Science Refresher"), "missing title in {html}");
    assert!(html.contains("25 questions"), "missing count in {html}");
    assert!(html.contains("fixed order"), "missing order note in {html}");
    assert!(html.contains("Start quiz"), "missing start link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_mentions_shuffled_order() {
    let mut harness = setup_view_harness(ViewKind::Home, true);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("random order"), "missing shuffle note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, false);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 25"), "missing position in {html}");
    assert!(html.contains("0 / 25 answered"), "missing progress in {html}");
    assert!(html.contains("closest to the Sun"), "missing title in {html}");
    assert!(html.contains("Mercury"), "missing option in {html}");
    assert!(html.contains("Check answer"), "missing check button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_answer_reveal_and_advance() {
    let mut harness = setup_view_harness(ViewKind::Quiz, false);
    harness.rebuild();

    harness.dispatch(QuizIntent::Answer(Answer::Choice(1)));
    harness.dispatch(QuizIntent::Reveal);
    let html = harness.render();
    assert!(html.contains("1 / 25 answered"), "missing answered count in {html}");
    assert!(html.contains("Correct"), "missing verdict in {html}");
    assert!(html.contains("58 million km"), "missing explanation in {html}");

    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 2 of 25"), "missing position in {html}");
    assert!(!html.contains("58 million km"), "feedback leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_rejected_jump_shows_inline_error() {
    let mut harness = setup_view_harness(ViewKind::Quiz, false);
    harness.rebuild();

    harness.dispatch(QuizIntent::JumpTo(99));
    let html = harness.render();
    assert!(html.contains("not part of this quiz"), "missing error in {html}");
    assert!(html.contains("Question 1 of 25"), "position changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finishing_quiz_opens_summary() {
    let mut harness = setup_view_harness(ViewKind::Quiz, false);
    harness.rebuild();

    harness.dispatch(QuizIntent::Answer(Answer::Choice(1)));
    for _ in 0..25 {
        harness.dispatch(QuizIntent::Next);
    }
    let html = harness.render();
    assert!(html.contains("View summary"), "missing completion banner in {html}");

    harness.dispatch(QuizIntent::ShowSummary);
    let html = harness.render();
    assert!(html.contains("Quiz Summary"), "missing summary in {html}");
    assert!(html.contains("Review answers"), "missing review action in {html}");

    let state = harness.quiz_handles.as_ref().expect("handles").state();
    let complete = harness.dom.in_runtime(|| match &*state.read() {
        ViewState::Ready(vm) => vm.session().is_complete(),
        ViewState::Error(_) => false,
    });
    assert!(complete);

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 of 25"), "restart did not reset in {html}");
    assert!(html.contains("0 / 25 answered"), "answers kept after restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn every_question_kind_renders_and_checks() {
    let mut harness = setup_view_harness(ViewKind::Quiz, false);
    harness.rebuild();

    for index in 0..25 {
        harness.dispatch(QuizIntent::JumpTo(index));
        let html = harness.render();
        let position = format!("Question {} of 25", index + 1);
        assert!(html.contains(&position), "missing {position} in {html}");
        assert!(html.contains("question-card"), "missing card at {index} in {html}");

        harness.dispatch(QuizIntent::Reveal);
        let _ = harness.render();
    }
}

#[tokio::test(flavor = "current_thread")]
async fn summary_rows_render_markdown() {
    let bank = QuestionBank::from_json(
        r#"{
            "title": "Plants",
            "questions": [{
                "id": "gas",
                "title": "Which **gas** do plants absorb?",
                "explanation": "See [photosynthesis](https://example.org/photo).",
                "kind": { "type": "multiple_choice", "data": {
                    "options": ["Oxygen", "Carbon dioxide"], "correct": 1
                } }
            }]
        }"#,
    )
    .expect("bank");
    let mut harness = setup_view_harness_with_bank(ViewKind::Quiz, bank, false);
    harness.rebuild();

    harness.dispatch(QuizIntent::Answer(Answer::Choice(0)));
    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::ShowSummary);
    let html = harness.render();

    assert!(html.contains("Quiz Summary"), "missing summary in {html}");
    assert!(html.contains("<strong>gas</strong>"), "title not rendered in {html}");
    assert!(!html.contains("**gas**"), "raw markdown in {html}");
    assert!(
        html.contains(r#"href="https://example.org/photo""#),
        "feedback link not rendered in {html}"
    );
}
