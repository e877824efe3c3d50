pub mod citations;
pub mod gemini;
pub mod interpreter;
pub mod view_controller;

#[cfg(test)]
pub mod testing;

pub use gemini::*;
pub use view_controller::*;
