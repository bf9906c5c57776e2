pub mod articles;
pub mod writers;
