pub mod buffer;
pub mod number;
pub mod token;
pub mod tokenizer;
