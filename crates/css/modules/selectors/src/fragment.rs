//! Fragment kinds and combinators.
//! See <https://www.w3.org/TR/selectors-3/#selector-syntax>

use core::fmt::{Display, Formatter, Result as FmtResult};

/// Kind of a selector fragment.
///
/// Variants are declared in the order fragments must appear inside one
/// compound selector, so the derived `Ord` is the ordering rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    /// Nothing appended yet, or the selector came out of a combinator.
    #[default]
    None,
    /// Type selector, rendered as `name`.
    Element,
    /// ID selector, rendered as `#name`.
    Id,
    /// Class selector, rendered as `.name`.
    Class,
    /// Attribute selector, rendered as `[name]`.
    Attribute,
    /// Pseudo-class, rendered as `:name`.
    PseudoClass,
    /// Pseudo-element, rendered as `::name`.
    PseudoElement,
}

impl FragmentKind {
    /// Every kind that can be appended, in canonical order.
    pub const APPENDABLE: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Whether a second fragment of this kind directly after the first is rejected.
    ///
    /// Only element, id and pseudo-element are restricted; class and attribute
    /// fragments may repeat freely.
    #[inline]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Whether a fragment of this kind may be appended after `previous`.
    #[inline]
    pub fn can_follow(self, previous: Self) -> bool {
        self >= previous
    }

    /// Text written before and after the fragment name.
    #[inline]
    pub const fn affixes(self) -> (&'static str, &'static str) {
        match self {
            Self::None | Self::Element => ("", ""),
            Self::Id => ("#", ""),
            Self::Class => (".", ""),
            Self::Attribute => ("[", "]"),
            Self::PseudoClass => (":", ""),
            Self::PseudoElement => ("::", ""),
        }
    }

    /// Human readable name, as used in error messages and on the command line.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }

    /// Look up an appendable kind by label. `attr` is accepted as a short form.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "attr" => Some(Self::Attribute),
            other => Self::APPENDABLE
                .into_iter()
                .find(|kind| kind.label() == other),
        }
    }

    /// Append `name` to `out` with this kind's affixes.
    #[inline]
    pub fn write_fragment(self, out: &mut String, name: &str) {
        let (prefix, suffix) = self.affixes();
        out.push_str(prefix);
        out.push_str(name);
        out.push_str(suffix);
    }
}

impl Display for FragmentKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.label())
    }
}

/// The standard combinators.
/// See <https://www.w3.org/TR/selectors-3/#combinators>
///
/// `combine` takes any string; this enum only names the usual ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Whitespace.
    Descendant,
    /// `>`
    Child,
    /// `+`
    NextSibling,
    /// `~`
    SubsequentSibling,
}

impl Combinator {
    /// Text copied between the two selectors.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl Display for Combinator {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.as_str())
    }
}
