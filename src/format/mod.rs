//! Qt Linguist `.ts` file format.
//!
//! ## Module Structure
//!
//! - `reader`: streaming XML loader producing a [`Catalogue`](crate::catalogue::Catalogue)
//! - `writer`: serializer producing Qt's own layout
//! - `cursor`: relative `<location>` line encoding shared by both
//! - `error`: [`ParseError`]

mod cursor;
mod error;
mod reader;
mod writer;

pub use cursor::{EncodedLocation, LineCursor};
pub use error::ParseError;
pub use reader::{load, load_str};
pub use writer::{save, save_string};
