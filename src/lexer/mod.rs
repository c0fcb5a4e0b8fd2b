//! Lexical analysis module for the Rin language.
//!
//! This module turns Rin source text into a stream of typed tokens:
//! keywords, identifiers, literals, operators and punctuation. Scanning
//! is a single pass with one character of lookahead. Malformed literals
//! and unknown characters are filed into the caller's
//! [`ReportBag`](crate::report::ReportBag) and scanning continues with a
//! best-effort token, so the stream always stays total.

mod keyword;
mod scanner;
mod token;

pub use keyword::{Keyword, KEYWORDS};
pub use scanner::{Position, Scanner};
pub use token::Token;
