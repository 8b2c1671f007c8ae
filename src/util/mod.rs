pub mod parse;
pub mod permissions;
