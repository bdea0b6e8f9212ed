use std::error::Error;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Errors raised while appending a fragment to a selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectorError {
    /// A fragment was appended after a kind that must come later.
    OrderingViolation,
    /// Element, id or pseudo-element was appended directly after a fragment of the same kind.
    DuplicateFragment,
}

impl Display for SelectorError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::OrderingViolation => formatter.write_str(
                "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element",
            ),
            Self::DuplicateFragment => formatter.write_str(
                "Element, id and pseudo-element should not occur more then one time inside the selector",
            ),
        }
    }
}

impl Error for SelectorError {}
