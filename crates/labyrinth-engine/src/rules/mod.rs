pub mod dictionary;
pub mod levels;
pub mod scoring;
