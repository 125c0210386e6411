mod common;

use quiz_engine::models::question::QuestionSet;
use quiz_engine::{AuthoringService, QuizConfig, QuizError, ScoringEngine};

#[test]
fn grader_sees_breakdown_and_prefilled_score() {
    let quiz = common::geography_quiz();
    let answers = common::answers(&[("q1", "B"), ("q2", "C"), ("q3", "C"), ("q4", "A")]);

    let (result, breakdown) = ScoringEngine::grade(&quiz, &answers, 100);
    assert_eq!(result.correct_count, 2);
    assert_eq!(result.total_count, 4);
    assert_eq!(result.raw_score, 50);

    let by_id = |id: &str| breakdown.iter().find(|b| b.question_id == id).unwrap();
    assert!(by_id("q1").correct);
    assert!(!by_id("q2").correct);
    assert_eq!(by_id("q2").correct_answer, "A");
    assert_eq!(by_id("q4").selected_label.as_deref(), Some("A"));
}

#[test]
fn unanswered_questions_lower_the_suggestion_without_erroring() {
    let quiz = common::geography_quiz();
    let answers = common::answers(&[("q1", "B")]);

    let result = ScoringEngine::score(&quiz, &answers, 100);
    assert_eq!(result.correct_count, 1);
    assert_eq!(result.total_count, 4);
    assert_eq!(result.raw_score, 25);
}

#[test]
fn empty_quiz_grades_to_zero() {
    let quiz = QuestionSet::new(vec![]).unwrap();
    let result = ScoringEngine::score(&quiz, &common::answers(&[]), 100);
    assert_eq!(result.correct_count, 0);
    assert_eq!(result.total_count, 0);
    assert_eq!(result.raw_score, 0);
}

#[test]
fn authored_quiz_flows_straight_into_grading() {
    let authoring = AuthoringService::new(&QuizConfig::default());
    let quiz = authoring
        .import_json(
            r#"[
                {"title": "2 + 2?", "options": ["3", "4", "5", "6"], "correct_answer": "b"},
                {"title": "10 / 2?", "options": ["5", "2", "20", "8"], "correct_answer": "a"}
            ]"#,
        )
        .unwrap();

    let ids: Vec<&str> = quiz.iter().map(|q| q.id.as_str()).collect();
    let answers = common::answers(&[(ids[0], "B"), (ids[1], "D")]);

    let result = ScoringEngine::score(&quiz, &answers, 20);
    assert_eq!(result.correct_count, 1);
    assert_eq!(result.raw_score, 10);
}

#[test]
fn malformed_quiz_is_rejected_before_students_see_it() {
    let err = QuestionSet::new(vec![common::question(
        "q1",
        "Broken",
        &["a", "b", "c", "d"],
        "Z",
    )])
    .unwrap_err();

    assert!(matches!(err, QuizError::UnknownCorrectAnswer { .. }));
    assert!(err.is_malformed_question());
}
