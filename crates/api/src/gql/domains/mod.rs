// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod articles;
pub mod writers;
