//! Selectors Level 3: building selector strings.
//! See <https://www.w3.org/TR/selectors-3/>
//!
//! This module builds selector text fragment by fragment:
//! - Type, id, class, attribute, pseudo-class and pseudo-element fragments
//! - Combinators, copied verbatim between two selectors
//! - Fragment ordering and uniqueness checks at every append
//!
//! Parsing selector text and matching against elements are not handled here.

mod builder;
mod error;
mod fragment;

// Re-export public API
pub use builder::{Selector, combine, selector};
pub use error::SelectorError;
pub use fragment::{Combinator, FragmentKind};
