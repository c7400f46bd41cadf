// Adapters layer: concrete implementations of the domain ports.

pub mod output;

pub use output::{ConsoleOutput, Transcript};
