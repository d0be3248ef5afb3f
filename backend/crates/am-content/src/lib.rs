//! Authored articles, held in memory for the life of the process.

mod content_store;
mod error;
mod mutation;
mod seed;


pub use content_store::ContentStore;
pub use error::{ContentError, Result as ContentResult};
pub use mutation::{Mutation, SkipReason};
pub use seed::{builtin_seed, parse_seed};
