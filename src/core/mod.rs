pub mod digits;
pub mod engine;

pub use digits::{is_palindrome, reverse_digits};
pub use engine::{reverse_and_add, SearchEngine, SearchOutcome};
