//! Pure-data containers for the platform's JSON documents. No behavior
//! beyond deserialization; absent fields stay `None`/empty.

mod media;
mod services;
pub use media::*;
pub use services::*;
