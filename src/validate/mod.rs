pub mod checks;

pub use checks::{entry_count, exact_len, numeric, numeric_slice};
