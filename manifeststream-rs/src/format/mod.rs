pub mod directives;
mod playlist;
mod tag;
pub use playlist::*;
pub use tag::*;
