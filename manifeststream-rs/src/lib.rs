//! # manifeststream-rs
//! A library for parsing and regenerating m3u8 manifest files
//!
//! # Example
//! ```rust
//! use manifeststream_rs::Parser;
//! use manifeststream_rs::format::{M3uItem, M3uTagId};
//! use std::io::Cursor;
//!
//! // 1. Parse
//! let mut parser = Parser::new(Cursor::new(r#"#EXTM3U
//! #EXT-X-MAP:URI="main/init.mp4"
//! main/segment-1.m4s"#));
//! parser.parse().unwrap();
//! let result = parser.get_result();
//!
//! // 2. Walk the items
//! for item in result.items.iter() {
//!     if let M3uItem::Tag(tag) = item {
//!         if tag.id == M3uTagId::ExtXMap {
//!             // Do your works with the map tag...
//!         }
//!     }
//! }
//!
//! // 3. Regenerate
//! println!("{}", result.to_string());
//! ```

mod builder;
pub mod format;
mod parser;
pub use parser::*;
