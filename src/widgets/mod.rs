//! Reusable UI widgets.

mod guess_input;

pub use guess_input::GuessInput;
