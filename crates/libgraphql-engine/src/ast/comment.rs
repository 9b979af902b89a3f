use crate::loc;

/// A `#`-comment attached to a [`Node`](crate::ast::Node).
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    pub content: String,
    pub location: Option<loc::SourceLocation>,
}
impl Comment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            location: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IgnoredCharKind {
    Comma,
    CarriageReturn,
    LineFeed,
    Space,
    Tab,
    Other,
}

/// A single run of insignificant source text (whitespace, commas) adjacent
/// to a [`Node`](crate::ast::Node).
#[derive(Clone, Debug, PartialEq)]
pub struct IgnoredChar {
    pub kind: IgnoredCharKind,
    pub location: Option<loc::SourceLocation>,
    pub value: String,
}

/// The ignored characters found immediately before (`left`) and after
/// (`right`) a [`Node`](crate::ast::Node) in its source text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IgnoredChars {
    pub left: Vec<IgnoredChar>,
    pub right: Vec<IgnoredChar>,
}
impl IgnoredChars {
    pub const EMPTY: IgnoredChars = IgnoredChars {
        left: vec![],
        right: vec![],
    };

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}
