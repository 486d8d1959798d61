pub mod grid;
pub mod letters;
