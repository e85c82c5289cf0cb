pub mod cli;
pub mod evaluate;
