mod output;
mod runner;

pub use runner::main;
