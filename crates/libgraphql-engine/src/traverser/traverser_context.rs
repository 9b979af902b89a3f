/// Mutable per-traversal state handed to every visit callback.
#[derive(Debug)]
pub struct TraverserContext<'a, T, A = ()> {
    pub(super) accumulator: A,
    pub(super) parents: Vec<&'a T>,
    pub(super) path: Vec<usize>,
}
impl<'a, T, A> TraverserContext<'a, T, A> {
    pub(super) fn new(accumulator: A) -> Self {
        Self {
            accumulator,
            parents: vec![],
            path: vec![],
        }
    }

    /// State shared across every callback of a single traversal.
    pub fn accumulator(&self) -> &A {
        &self.accumulator
    }

    pub fn accumulator_mut(&mut self) -> &mut A {
        &mut self.accumulator
    }

    /// The index of the current node within its parent's children (or
    /// within the list of roots).
    pub fn child_index(&self) -> usize {
        self.path.last().copied().unwrap_or_default()
    }

    /// Number of ancestors of the current node. Roots are at depth 0.
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    pub fn parent(&self) -> Option<&'a T> {
        self.parents.last().copied()
    }

    /// Ancestors of the current node, root first.
    pub fn parents(&self) -> &[&'a T] {
        self.parents.as_slice()
    }

    /// Child indexes leading from the root to the current node.
    pub fn path(&self) -> &[usize] {
        self.path.as_slice()
    }
}
