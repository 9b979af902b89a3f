use crate::traverser::TraversalControl;
use crate::traverser::TraverserContext;
use std::collections::HashSet;
use std::marker::PhantomData;

/// Callbacks invoked by a [`Traverser`].
///
/// An `Err` from any callback stops the traversal immediately and is
/// returned from [`Traverser::traverse()`]. Nothing done by earlier
/// callbacks is rolled back.
pub trait TraverserVisitor<'a, T, A = ()> {
    type Error;

    /// Called before any of `node`'s children are visited.
    fn enter(
        &mut self,
        node: &'a T,
        ctx: &mut TraverserContext<'a, T, A>,
    ) -> Result<TraversalControl, Self::Error>;

    /// Called after all of `node`'s children were visited. Not called when
    /// [`enter`](Self::enter) returned [`TraversalControl::Abort`].
    fn leave(
        &mut self,
        _node: &'a T,
        _ctx: &mut TraverserContext<'a, T, A>,
    ) -> Result<TraversalControl, Self::Error> {
        Ok(TraversalControl::Continue)
    }

    /// Called instead of [`enter`](Self::enter) when visited-tracking is on
    /// and `node` was already visited.
    fn back_ref(
        &mut self,
        _node: &'a T,
        _ctx: &mut TraverserContext<'a, T, A>,
    ) -> Result<TraversalControl, Self::Error> {
        Ok(TraversalControl::Continue)
    }
}

#[derive(Debug)]
pub struct TraverserResult<A> {
    pub accumulator: A,

    /// Whether some callback returned [`TraversalControl::Quit`].
    pub quit: bool,
}

enum Flow {
    Continue,
    Quit,
}

/// A depth-first walker over any tree (or, with visited-tracking, any
/// graph) whose shape is described by a `children` function.
///
/// Children are visited in exactly the order `children` returns them, so
/// two traversals of the same structure visit nodes in the same order.
pub struct Traverser<'a, T, F> {
    children: F,
    phantom: PhantomData<fn(&'a T)>,
    track_visited: bool,
}
impl<'a, T, F> Traverser<'a, T, F>
where
    F: Fn(&'a T) -> Vec<&'a T>,
{
    pub fn depth_first(children: F) -> Self {
        Self {
            children,
            phantom: PhantomData,
            track_visited: false,
        }
    }

    /// Visit each node (by identity) at most once. Later encounters of an
    /// already-visited node go to [`TraverserVisitor::back_ref()`]. Needed
    /// when walking graphs that may contain cycles.
    pub fn with_visited_tracking(mut self) -> Self {
        self.track_visited = true;
        self
    }

    pub fn traverse<A, V>(
        &self,
        roots: impl IntoIterator<Item = &'a T>,
        accumulator: A,
        visitor: &mut V,
    ) -> Result<TraverserResult<A>, V::Error>
    where
        V: TraverserVisitor<'a, T, A>,
    {
        let mut ctx = TraverserContext::new(accumulator);
        let mut visited = HashSet::new();
        let mut quit = false;
        for (idx, root) in roots.into_iter().enumerate() {
            ctx.path.push(idx);
            let flow = self.walk(root, &mut ctx, &mut visited, visitor)?;
            ctx.path.pop();
            if let Flow::Quit = flow {
                quit = true;
                break;
            }
        }

        Ok(TraverserResult {
            accumulator: ctx.accumulator,
            quit,
        })
    }

    fn walk<A, V>(
        &self,
        node: &'a T,
        ctx: &mut TraverserContext<'a, T, A>,
        visited: &mut HashSet<*const T>,
        visitor: &mut V,
    ) -> Result<Flow, V::Error>
    where
        V: TraverserVisitor<'a, T, A>,
    {
        if self.track_visited && !visited.insert(node as *const T) {
            return Ok(match visitor.back_ref(node, ctx)? {
                TraversalControl::Quit => Flow::Quit,
                _ => Flow::Continue,
            });
        }

        match visitor.enter(node, ctx)? {
            TraversalControl::Continue => (),
            TraversalControl::Abort => return Ok(Flow::Continue),
            TraversalControl::Quit => return Ok(Flow::Quit),
        }

        ctx.parents.push(node);
        for (idx, child) in (self.children)(node).into_iter().enumerate() {
            ctx.path.push(idx);
            let flow = self.walk(child, ctx, visited, visitor)?;
            ctx.path.pop();
            if let Flow::Quit = flow {
                ctx.parents.pop();
                return Ok(Flow::Quit);
            }
        }
        ctx.parents.pop();

        Ok(match visitor.leave(node, ctx)? {
            TraversalControl::Quit => Flow::Quit,
            _ => Flow::Continue,
        })
    }
}
