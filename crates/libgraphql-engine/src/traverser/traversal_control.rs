/// Returned by every visit callback to direct the rest of a traversal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TraversalControl {
    /// Descend into the current node's children.
    #[default]
    Continue,

    /// Skip the current node's children (and its `leave` callback), then
    /// carry on with its next sibling.
    Abort,

    /// Stop the entire traversal immediately.
    Quit,
}
