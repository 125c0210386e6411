pub mod rng;
pub mod shuffle;
