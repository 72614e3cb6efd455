//! HTTP Handlers

mod page;
mod panels;
mod ping;

pub use page::*;
pub use panels::*;
pub use ping::*;
