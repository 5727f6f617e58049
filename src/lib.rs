pub mod convert;
pub mod document;
pub mod parse;
