use serde::Deserialize;
use std::env;

const DEFAULT_MAX_SCORE: i32 = 100;
const DEFAULT_MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    /// Pre-filled maximum score when assignment metadata does not supply one.
    pub default_max_score: i32,
    /// Minimum number of options a question must carry at authoring time.
    pub min_options: usize,
    /// Shuffle the order of questions within an attempt.
    pub shuffle_questions: bool,
    /// Shuffle the order of options within each question.
    pub shuffle_options: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_max_score: DEFAULT_MAX_SCORE,
            min_options: DEFAULT_MIN_OPTIONS,
            shuffle_questions: true,
            shuffle_options: true,
        }
    }
}

impl QuizConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            // Load base config from TOML file
            .add_source(
                config::File::with_name(&format!("config/{}", env)).required(false), // Allow missing config file, fallback to ENV
            )
            // Override with environment variables (prefix: QUIZ_)
            .add_source(config::Environment::with_prefix("QUIZ").separator("__"));

        let settings = config_builder.build()?;

        // Extract values with fallbacks to defaults
        let default_max_score = settings
            .get_int("scoring.default_max_score")
            .ok()
            .map(|v| v as i32)
            .filter(|v| *v >= 1)
            .unwrap_or(DEFAULT_MAX_SCORE);

        let min_options = settings
            .get_int("authoring.min_options")
            .ok()
            .map(|v| v as usize)
            .filter(|v| *v >= 2)
            .unwrap_or(DEFAULT_MIN_OPTIONS);

        let shuffle_questions = settings
            .get_bool("randomization.shuffle_questions")
            .unwrap_or(true);

        let shuffle_options = settings
            .get_bool("randomization.shuffle_options")
            .unwrap_or(true);

        Ok(QuizConfig {
            default_max_score,
            min_options,
            shuffle_questions,
            shuffle_options,
        })
    }
}
