pub mod alphabet;
pub mod dictionary;
pub mod error;
pub mod pattern;
pub mod repl;
