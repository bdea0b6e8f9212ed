//! Immutable selector builder.
//! See <https://www.w3.org/TR/selectors-3/#selector-syntax>

use crate::{FragmentKind, SelectorError};
use core::fmt::{Display, Formatter, Result as FmtResult};
use log::{debug, trace};

/// Selector text built so far, plus the kind of the last appended fragment.
///
/// Every append returns a new `Selector`; the receiver is never modified, so a
/// partially built selector can be reused as the base of several chains.
///
/// ```
/// use css_selectors::selector;
///
/// let link = selector().element("a")?.attr("href$=\".png\"")?.pseudo_class("focus")?;
/// assert_eq!(link.stringify(), "a[href$=\".png\"]:focus");
/// # Ok::<(), css_selectors::SelectorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Accumulated selector text.
    text: String,
    /// Kind of the most recently appended fragment.
    last_kind: FragmentKind,
}

impl Selector {
    /// The empty selector: no text, last kind `None`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            last_kind: FragmentKind::None,
        }
    }

    /// Append a type selector, `name`.
    ///
    /// # Errors
    /// `OrderingViolation` after any other fragment kind,
    /// `DuplicateFragment` if the last fragment is already an element.
    #[inline]
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, name)
    }

    /// Append an ID selector, `#name`.
    ///
    /// # Errors
    /// `OrderingViolation` after a class, attribute or pseudo fragment,
    /// `DuplicateFragment` if the last fragment is already an id.
    #[inline]
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, name)
    }

    /// Append a class selector, `.name`.
    ///
    /// # Errors
    /// `OrderingViolation` after an attribute or pseudo fragment.
    #[inline]
    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, name)
    }

    /// Append an attribute selector, `[name]`. `name` may carry an operator and
    /// value, e.g. `href$=".png"`; it is copied as is.
    ///
    /// # Errors
    /// `OrderingViolation` after a pseudo fragment.
    #[inline]
    pub fn attr(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, name)
    }

    /// Append a pseudo-class, `:name`.
    ///
    /// # Errors
    /// `OrderingViolation` after a pseudo-element.
    #[inline]
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, name)
    }

    /// Append a pseudo-element, `::name`.
    ///
    /// # Errors
    /// `DuplicateFragment` if the last fragment is already a pseudo-element.
    #[inline]
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, name)
    }

    /// Check `kind` against the last fragment, then derive the extended selector.
    fn append(&self, kind: FragmentKind, name: &str) -> Result<Self, SelectorError> {
        // Ordering is checked against the receiver before the duplicate rule.
        if !kind.can_follow(self.last_kind) {
            debug!(
                target: "css::selectors::builder",
                "rejecting {kind} after {} in {:?}",
                self.last_kind,
                self.text
            );
            return Err(SelectorError::OrderingViolation);
        }
        if kind.is_unique() && kind == self.last_kind {
            debug!(
                target: "css::selectors::builder",
                "rejecting second {kind} in {:?}",
                self.text
            );
            return Err(SelectorError::DuplicateFragment);
        }

        let (prefix, suffix) = kind.affixes();
        let mut text =
            String::with_capacity(self.text.len() + prefix.len() + name.len() + suffix.len());
        text.push_str(&self.text);
        kind.write_fragment(&mut text, name);
        trace!(target: "css::selectors::builder", "{kind}: {text:?}");
        Ok(Self {
            text,
            last_kind: kind,
        })
    }

    /// Join `self` and `right` as `"<self> <combinator> <right>"`.
    ///
    /// The combinator is copied verbatim. The result starts over at kind
    /// `None`, so any fragment may be appended to it.
    #[must_use]
    pub fn combine(&self, combinator: &str, right: &Self) -> Self {
        let text = format!("{} {combinator} {}", self.text, right.text);
        trace!(target: "css::selectors::builder", "combined: {text:?}");
        Self {
            text,
            last_kind: FragmentKind::None,
        }
    }

    /// The accumulated selector text.
    #[inline]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    /// Borrow the accumulated selector text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Kind of the most recently appended fragment.
    #[inline]
    pub const fn last_kind(&self) -> FragmentKind {
        self.last_kind
    }

    /// True when no text has been accumulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Display for Selector {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(&self.text)
    }
}

impl From<Selector> for String {
    #[inline]
    fn from(selector: Selector) -> Self {
        selector.text
    }
}

/// Entry point of a builder chain: the empty selector.
#[inline]
pub const fn selector() -> Selector {
    Selector::new()
}

/// Join two selectors with a combinator: `"<left> <combinator> <right>"`.
#[inline]
pub fn combine(left: &Selector, combinator: &str, right: &Selector) -> Selector {
    left.combine(combinator, right)
}
