pub mod engine;
pub mod keys;

pub use engine::{Calculator, Operator, format_number};
pub use keys::Key;
