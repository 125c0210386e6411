pub mod attempt_service;
pub mod authoring_service;
pub mod randomizer_service;
pub mod scoring_service;
pub mod seed_store;
