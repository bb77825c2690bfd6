pub mod dump;
pub mod find;
pub mod insert;
pub mod parse;
