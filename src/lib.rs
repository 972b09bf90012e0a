pub mod commands;
pub mod global;
pub mod plan;
pub mod share;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
