//! Template renderers.

mod delimiter;

pub use delimiter::{DEFAULT_DELIMITER, DelimiterRenderer};
