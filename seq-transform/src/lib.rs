//! Small collection and value helpers complementing the standard library:
//! list construction ([`list`]), map building and union ([`map`]) and
//! value-scope combinators ([`scope`]).

pub mod list;
pub mod map;
pub mod scope;

pub use scope::{Also, Apply};
