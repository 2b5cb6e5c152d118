// Small general-purpose helpers

pub mod text;

pub use text::{capitalize_each_word, search_by, strip_each_line, truncate};
