use crate::ast::Node;
use indexmap::IndexMap;

/// A [`Node`]'s children keyed by child role (e.g. `"selections"`,
/// `"arguments"`, `"value"`).
///
/// Returned by [`Node::named_children()`] and accepted by
/// [`Node::with_new_children()`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeChildrenContainer {
    children: IndexMap<String, Vec<Node>>,
}
impl NodeChildrenContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first child stored under `role`, if any.
    pub fn child(&self, role: &str) -> Option<&Node> {
        self.children.get(role).and_then(|nodes| nodes.first())
    }

    pub fn children(&self, role: &str) -> &[Node] {
        self.children.get(role)
            .map(|nodes| nodes.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.children.values().all(|nodes| nodes.is_empty())
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(|role| role.as_str())
    }

    /// Appends `node` to the children stored under `role`.
    pub fn with_child(mut self, role: impl Into<String>, node: Node) -> Self {
        self.children.entry(role.into()).or_default().push(node);
        self
    }

    /// Replaces every child stored under `role` with `nodes`.
    pub fn with_children(
        mut self,
        role: impl Into<String>,
        nodes: Vec<Node>,
    ) -> Self {
        self.children.insert(role.into(), nodes);
        self
    }

    pub(super) fn entries(&self) -> impl Iterator<Item = (&str, &Vec<Node>)> {
        self.children.iter().map(|(role, nodes)| (role.as_str(), nodes))
    }

    pub(super) fn take(&mut self, role: &str) -> Vec<Node> {
        self.children.shift_remove(role).unwrap_or_default()
    }

    pub(super) fn take_one(&mut self, role: &str) -> Option<Box<Node>> {
        self.take(role).into_iter().next().map(Box::new)
    }
}
