//! Command-line front end for the selector builder.
//!
//! Arguments are folded left to right: `kind=name` appends a fragment, any
//! other argument is a combinator joining everything before it with what
//! follows.
//!
//! ```text
//! selkit element=div id=main + element=span
//! div#main + span
//! ```

use anyhow::{Context as _, Result, anyhow};
use css_selectors::{FragmentKind, Selector, combine};
use env_logger::{Builder, Env};
use log::debug;
use std::env;
use std::io::{Write as _, stderr, stdout};

/// Print usage information to stderr.
fn print_usage() {
    drop(writeln!(
        stderr(),
        "Usage:\n  selkit <kind>=<name>... [<combinator> <kind>=<name>...]...\n\nKinds: element, id, class, attr, pseudo-class, pseudo-element\nCombinators are copied as given, e.g. '>' '+' '~'\nSet RUST_LOG=debug to trace rejected fragments."
    ));
}

/// Append `name` as a fragment of `kind`.
fn append(selector: &Selector, kind: FragmentKind, name: &str) -> Result<Selector> {
    let next = match kind {
        FragmentKind::Element => selector.element(name),
        FragmentKind::Id => selector.id(name),
        FragmentKind::Class => selector.class(name),
        FragmentKind::Attribute => selector.attr(name),
        FragmentKind::PseudoClass => selector.pseudo_class(name),
        FragmentKind::PseudoElement => selector.pseudo_element(name),
        FragmentKind::None => return Err(anyhow!("'none' is not an appendable fragment kind")),
    };
    next.with_context(|| {
        format!(
            "cannot append {kind} '{name}' after {} in '{selector}'",
            selector.last_kind()
        )
    })
}

/// Fold command-line arguments into a single selector.
///
/// # Errors
/// Returns an error for an unknown fragment kind or a rejected fragment.
fn build<I, S>(args: I) -> Result<Selector>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut combinators: Vec<String> = Vec::new();
    let mut selectors = vec![Selector::new()];
    for arg in args {
        let token = arg.as_ref();
        if let Some((label, name)) = token.split_once('=') {
            let kind = FragmentKind::from_label(label)
                .ok_or_else(|| anyhow!("unknown fragment kind '{label}'"))?;
            let current = selectors.pop().unwrap_or_default();
            selectors.push(append(&current, kind, name)?);
        } else {
            debug!(target: "selkit", "combinator {token:?} opens selector #{}", selectors.len());
            combinators.push(token.to_owned());
            selectors.push(Selector::new());
        }
    }
    let mut parts = selectors.into_iter();
    let first = parts.next().unwrap_or_default();
    Ok(combinators
        .iter()
        .zip(parts)
        .fold(first, |left, (combinator, right)| {
            combine(&left, combinator, &right)
        }))
}

/// Main entry point for the selkit CLI tool.
///
/// # Errors
/// Returns an error if the arguments do not form a valid selector.
fn main() -> Result<()> {
    let _log_init: Result<(), _> =
        Builder::from_env(Env::default().filter_or("RUST_LOG", "warn")).try_init();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return Err(anyhow!("missing selector fragments"));
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }
    let selector = build(&args)?;
    writeln!(stdout(), "{selector}")?;
    Ok(())
}
