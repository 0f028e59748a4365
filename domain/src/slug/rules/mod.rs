pub mod aliases;
pub mod charset;
pub mod whitespace;
