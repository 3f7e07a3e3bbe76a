#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod ipv4;
mod ipv6;
mod modifier;
mod parser;
mod resolver;
mod scheme;
mod types;
mod unicode;
mod url;
mod url_base;
mod url_components;

pub mod components;

// Public API
pub use components::{Collection, Component, Entry, FilterMode, SortMode};
pub use error::{ParseError, Result};
pub use modifier::Modifier;
pub use parser::{Parseable, parse};
pub use types::SchemeType;
pub use url::Url;
pub use url_base::UrlBase;
