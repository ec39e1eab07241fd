pub mod random_source;
pub mod random_source_mock;
pub mod randomizer;

pub use random_source::{RandomSource, RngSource};
pub use random_source_mock::ScriptedRandomSource;
pub use randomizer::randomize_occupancy;
