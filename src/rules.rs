//! Stylesheet rule sets: schema, loading and compilation.
//!
//! A rule set decides which discovered files become tracks, which RNA
//! strands are merged, how tracks are ordered and which attributes they get.

mod compiled;
mod load;
mod schema;

pub use compiled::CompiledRules;
pub use load::*;
pub use schema::*;
