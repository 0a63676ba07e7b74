pub mod domain;
pub mod error;
pub mod protocol;
pub mod state;

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
