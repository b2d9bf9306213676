//! AI assistant endpoints

mod generate;

pub use generate::generate;
