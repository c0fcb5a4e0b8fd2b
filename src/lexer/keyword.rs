//! Reserved words of the Rin language.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Tag identifying one reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Public,
    Private,
    Protected,
    Internal,
    Namespace,
    Enum,
    Class,
    Struct,
    Void,
    Static,
    Abstract,
    Virtual,
    Override,
    If,
    Else,
    For,
    While,
    Foreach,
    Do,
    Interface,
    Var,
    Return,
}

/// Spelling-to-tag table for every reserved word.
///
/// Built once on first use and shared read-only across all scanners.
/// Extending the reserved-word set means extending this table only; the
/// scanner is unaware of its contents beyond a single lookup call.
/// `true` and `false` are deliberately absent: they are boolean
/// literals, not keywords.
pub static KEYWORDS: LazyLock<IndexMap<&'static str, Keyword>> = LazyLock::new(|| {
    IndexMap::from([
        ("public", Keyword::Public),
        ("private", Keyword::Private),
        ("protected", Keyword::Protected),
        ("internal", Keyword::Internal),
        ("namespace", Keyword::Namespace),
        ("enum", Keyword::Enum),
        ("class", Keyword::Class),
        ("struct", Keyword::Struct),
        ("void", Keyword::Void),
        ("static", Keyword::Static),
        ("abstract", Keyword::Abstract),
        ("virtual", Keyword::Virtual),
        ("override", Keyword::Override),
        ("if", Keyword::If),
        ("else", Keyword::Else),
        ("for", Keyword::For),
        ("while", Keyword::While),
        ("foreach", Keyword::Foreach),
        ("do", Keyword::Do),
        ("interface", Keyword::Interface),
        ("var", Keyword::Var),
        ("return", Keyword::Return),
    ])
});

impl Keyword {
    /// Exact-spelling, case-sensitive lookup against the reserved set.
    pub fn lookup(spelling: &str) -> Option<Keyword> {
        KEYWORDS.get(spelling).copied()
    }

    /// The written form of this keyword.
    pub fn spelling(self) -> &'static str {
        match self {
            Keyword::Public => "public",
            Keyword::Private => "private",
            Keyword::Protected => "protected",
            Keyword::Internal => "internal",
            Keyword::Namespace => "namespace",
            Keyword::Enum => "enum",
            Keyword::Class => "class",
            Keyword::Struct => "struct",
            Keyword::Void => "void",
            Keyword::Static => "static",
            Keyword::Abstract => "abstract",
            Keyword::Virtual => "virtual",
            Keyword::Override => "override",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Foreach => "foreach",
            Keyword::Do => "do",
            Keyword::Interface => "interface",
            Keyword::Var => "var",
            Keyword::Return => "return",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}
