use quiz_engine::models::question::{label_for_position, Question, QuestionSet};
use quiz_engine::models::AnswerOption;
use quiz_engine::models::submission::AnswerMap;

/// Builds a question with positional labels and the given option texts.
pub fn question(id: &str, title: &str, texts: &[&str], correct: &str) -> Question {
    Question {
        id: id.to_string(),
        title: title.to_string(),
        options: texts
            .iter()
            .enumerate()
            .map(|(i, text)| AnswerOption {
                label: label_for_position(i),
                text: text.to_string(),
            })
            .collect(),
        correct_answer: correct.to_string(),
    }
}

/// Small geography quiz used across the integration tests.
pub fn geography_quiz() -> QuestionSet {
    QuestionSet::new(vec![
        question(
            "q1",
            "Capital of France?",
            &["Lyon", "Paris", "Marseille", "Nice"],
            "B",
        ),
        question(
            "q2",
            "Longest river?",
            &["Nile", "Amazon", "Yangtze", "Danube"],
            "A",
        ),
        question(
            "q3",
            "Largest desert?",
            &["Gobi", "Kalahari", "Sahara", "Atacama"],
            "C",
        ),
        question(
            "q4",
            "Highest mountain?",
            &["K2", "Everest", "Denali", "Elbrus"],
            "B",
        ),
    ])
    .unwrap()
}

/// Answer map built from label picks keyed by question id.
pub fn answers(picks: &[(&str, &str)]) -> AnswerMap {
    picks
        .iter()
        .map(|(id, label)| (id.to_string(), label.to_string()))
        .collect()
}
