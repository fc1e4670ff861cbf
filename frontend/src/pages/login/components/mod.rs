pub mod content;
pub mod form;
