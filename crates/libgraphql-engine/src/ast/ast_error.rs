use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AstError {
    #[error("Failed to parse `{}`: {message}", file_display(file))]
    ParseError {
        file: Option<PathBuf>,
        message: String,
    },

    #[error(
        "A `{node_kind}` node does not have a child role named `{role}`"
    )]
    UnexpectedChildRole {
        node_kind: &'static str,
        role: String,
    },

    #[error(
        "The `{role}` child role of a `{node_kind}` node holds at most one \
        node, but {count} were given"
    )]
    TooManyChildren {
        count: usize,
        node_kind: &'static str,
        role: &'static str,
    },

    #[error(
        "The `{role}` child role of a `{node_kind}` node is required, but no \
        node was given"
    )]
    MissingChild {
        node_kind: &'static str,
        role: &'static str,
    },

    #[error(
        "The `{role}` child role of a `{node_kind}` node can not hold a \
        `{child_kind}` node"
    )]
    UnexpectedChildKind {
        child_kind: &'static str,
        node_kind: &'static str,
        role: &'static str,
    },
}

fn file_display(file: &Option<PathBuf>) -> String {
    match file {
        Some(path) => path.display().to_string(),
        None => "<str>".to_string(),
    }
}
