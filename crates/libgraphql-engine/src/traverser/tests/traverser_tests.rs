use crate::traverser::TraversalControl;
use crate::traverser::Traverser;
use crate::traverser::TraverserContext;
use crate::traverser::TraverserVisitor;

struct Tree {
    label: &'static str,
    children: Vec<Tree>,
}
impl Tree {
    fn leaf(label: &'static str) -> Self {
        Self { label, children: vec![] }
    }

    fn branch(label: &'static str, children: Vec<Tree>) -> Self {
        Self { label, children }
    }

    fn children(&self) -> Vec<&Tree> {
        self.children.iter().collect()
    }
}

fn sample_tree() -> Tree {
    Tree::branch("a", vec![
        Tree::branch("b", vec![Tree::leaf("c"), Tree::leaf("d")]),
        Tree::leaf("e"),
    ])
}

#[derive(Default)]
struct Recorder {
    abort_at: Option<&'static str>,
    quit_at: Option<&'static str>,
}
impl<'a> TraverserVisitor<'a, Tree, Vec<String>> for Recorder {
    type Error = ();

    fn enter(
        &mut self,
        node: &'a Tree,
        ctx: &mut TraverserContext<'a, Tree, Vec<String>>,
    ) -> Result<TraversalControl, ()> {
        ctx.accumulator_mut().push(format!("enter {}", node.label));
        if self.quit_at == Some(node.label) {
            return Ok(TraversalControl::Quit);
        }
        if self.abort_at == Some(node.label) {
            return Ok(TraversalControl::Abort);
        }
        Ok(TraversalControl::Continue)
    }

    fn leave(
        &mut self,
        node: &'a Tree,
        ctx: &mut TraverserContext<'a, Tree, Vec<String>>,
    ) -> Result<TraversalControl, ()> {
        ctx.accumulator_mut().push(format!("leave {}", node.label));
        Ok(TraversalControl::Continue)
    }
}

fn run(tree: &Tree, visitor: &mut Recorder) -> (Vec<String>, bool) {
    let result = Traverser::depth_first(Tree::children)
        .traverse([tree], vec![], visitor)
        .unwrap();
    (result.accumulator, result.quit)
}

#[test]
fn visits_depth_first_in_child_order() {
    let tree = sample_tree();
    let (log, quit) = run(&tree, &mut Recorder::default());
    assert_eq!(log, vec![
        "enter a",
        "enter b",
        "enter c",
        "leave c",
        "enter d",
        "leave d",
        "leave b",
        "enter e",
        "leave e",
        "leave a",
    ]);
    assert!(!quit);
}

#[test]
fn abort_skips_children_and_leave() {
    let tree = sample_tree();
    let (log, quit) = run(&tree, &mut Recorder {
        abort_at: Some("b"),
        ..Default::default()
    });
    assert_eq!(log, vec![
        "enter a",
        "enter b",
        "enter e",
        "leave e",
        "leave a",
    ]);
    assert!(!quit);
}

#[test]
fn quit_stops_the_whole_traversal() {
    let tree = sample_tree();
    let (log, quit) = run(&tree, &mut Recorder {
        quit_at: Some("c"),
        ..Default::default()
    });
    assert_eq!(log, vec!["enter a", "enter b", "enter c"]);
    assert!(quit);
}

#[test]
fn quit_skips_remaining_roots() {
    let first = Tree::leaf("x");
    let second = Tree::leaf("y");
    let mut visitor = Recorder {
        quit_at: Some("x"),
        ..Default::default()
    };
    let result = Traverser::depth_first(Tree::children)
        .traverse([&first, &second], vec![], &mut visitor)
        .unwrap();
    assert_eq!(result.accumulator, vec!["enter x"]);
    assert!(result.quit);
}

type Position = (&'static str, usize, Vec<usize>, Option<&'static str>);

struct Positions;
impl<'a> TraverserVisitor<'a, Tree, Vec<Position>> for Positions {
    type Error = ();

    fn enter(
        &mut self,
        node: &'a Tree,
        ctx: &mut TraverserContext<'a, Tree, Vec<Position>>,
    ) -> Result<TraversalControl, ()> {
        let depth = ctx.depth();
        let path = ctx.path().to_vec();
        let parent = ctx.parent().map(|parent| parent.label);
        assert_eq!(ctx.child_index(), path.last().copied().unwrap_or_default());
        assert_eq!(ctx.parents().len(), depth);
        ctx.accumulator_mut().push((node.label, depth, path, parent));
        Ok(TraversalControl::Continue)
    }
}

#[test]
fn context_tracks_depth_path_and_parent() {
    let tree = sample_tree();
    let result = Traverser::depth_first(Tree::children)
        .traverse([&tree], vec![], &mut Positions)
        .unwrap();
    assert_eq!(result.accumulator, vec![
        ("a", 0, vec![0], None),
        ("b", 1, vec![0, 0], Some("a")),
        ("c", 2, vec![0, 0, 0], Some("b")),
        ("d", 2, vec![0, 0, 1], Some("b")),
        ("e", 1, vec![0, 1], Some("a")),
    ]);
}

struct FailAt(&'static str);
impl<'a> TraverserVisitor<'a, Tree, usize> for FailAt {
    type Error = String;

    fn enter(
        &mut self,
        node: &'a Tree,
        ctx: &mut TraverserContext<'a, Tree, usize>,
    ) -> Result<TraversalControl, String> {
        if node.label == self.0 {
            return Err(format!("failed at {}", node.label));
        }
        *ctx.accumulator_mut() += 1;
        Ok(TraversalControl::Continue)
    }
}

#[test]
fn visitor_error_stops_traversal() {
    let tree = sample_tree();
    let result = Traverser::depth_first(Tree::children)
        .traverse([&tree], 0, &mut FailAt("d"));
    assert_eq!(result.unwrap_err(), "failed at d");
}

struct Graph {
    nodes: Vec<GraphNode>,
}
impl Graph {
    fn children_fn<'a>(&'a self) -> impl Fn(&'a GraphNode) -> Vec<&'a GraphNode> + 'a {
        move |node| node.edges.iter().map(|idx| &self.nodes[*idx]).collect()
    }
}

struct GraphNode {
    edges: Vec<usize>,
    label: &'static str,
}

#[derive(Default)]
struct GraphLog {
    back_refs: Vec<&'static str>,
    entered: Vec<&'static str>,
}
struct CycleRecorder;
impl<'a> TraverserVisitor<'a, GraphNode, GraphLog> for CycleRecorder {
    type Error = ();

    fn enter(
        &mut self,
        node: &'a GraphNode,
        ctx: &mut TraverserContext<'a, GraphNode, GraphLog>,
    ) -> Result<TraversalControl, ()> {
        ctx.accumulator_mut().entered.push(node.label);
        Ok(TraversalControl::Continue)
    }

    fn back_ref(
        &mut self,
        node: &'a GraphNode,
        ctx: &mut TraverserContext<'a, GraphNode, GraphLog>,
    ) -> Result<TraversalControl, ()> {
        ctx.accumulator_mut().back_refs.push(node.label);
        Ok(TraversalControl::Continue)
    }
}

#[test]
fn visited_tracking_enters_each_node_once_in_a_cycle() {
    // a -> b -> c -> a, and a -> c
    let graph = Graph {
        nodes: vec![
            GraphNode { label: "a", edges: vec![1, 2] },
            GraphNode { label: "b", edges: vec![2] },
            GraphNode { label: "c", edges: vec![0] },
        ],
    };
    let result = Traverser::depth_first(graph.children_fn())
        .with_visited_tracking()
        .traverse([&graph.nodes[0]], GraphLog::default(), &mut CycleRecorder)
        .unwrap();
    assert_eq!(result.accumulator.entered, vec!["a", "b", "c"]);
    assert_eq!(result.accumulator.back_refs, vec!["a", "c"]);
}
