pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::QuizConfig;
pub use error::QuizError;
pub use services::attempt_service::AttemptService;
pub use services::authoring_service::AuthoringService;
pub use services::randomizer_service::QuestionRandomizer;
pub use services::scoring_service::{AnswerKeyResolver, ScoringEngine};
pub use services::seed_store::{InMemorySeedStore, SeedStore, SessionSeedStore};
