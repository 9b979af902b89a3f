use crate::ast::Node;
use crate::traverser::NodeContext;
use crate::traverser::NodeVisitor;
use crate::traverser::TraversalControl;
use crate::traverser::Traverser;
use crate::traverser::TraverserResult;
use crate::traverser::TraverserVisitor;

/// Walks a [`Node`] tree depth-first, dispatching each node to the
/// [`NodeVisitor`] method for its kind.
pub struct NodeTraverser;
impl NodeTraverser {
    pub fn traverse<'a, V: NodeVisitor<'a>>(
        root: &'a Node,
        visitor: &mut V,
    ) -> Result<TraverserResult<()>, V::Error> {
        Self::traverse_all([root], visitor)
    }

    pub fn traverse_all<'a, V: NodeVisitor<'a>>(
        roots: impl IntoIterator<Item = &'a Node>,
        visitor: &mut V,
    ) -> Result<TraverserResult<()>, V::Error> {
        Traverser::depth_first(Node::children)
            .traverse(roots, (), &mut Dispatcher(visitor))
    }
}

struct Dispatcher<'v, V>(&'v mut V);
impl<'a, V: NodeVisitor<'a>> TraverserVisitor<'a, Node> for Dispatcher<'_, V> {
    type Error = V::Error;

    fn enter(
        &mut self,
        node: &'a Node,
        ctx: &mut NodeContext<'a>,
    ) -> Result<TraversalControl, Self::Error> {
        node.accept(self.0, ctx)
    }

    fn leave(
        &mut self,
        node: &'a Node,
        ctx: &mut NodeContext<'a>,
    ) -> Result<TraversalControl, Self::Error> {
        self.0.leave_node(node, ctx)
    }
}
