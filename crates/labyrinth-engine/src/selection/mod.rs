pub mod engine;
pub mod path;
pub mod trail;
