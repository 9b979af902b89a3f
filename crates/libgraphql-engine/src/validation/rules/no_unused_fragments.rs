use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashSet;

/// Every fragment definition must be spread, directly or transitively, by
/// some operation.
#[derive(Debug, Default)]
pub struct NoUnusedFragments;
impl<'a> Rule<'a> for NoUnusedFragments {
    fn name(&self) -> &'static str {
        "NoUnusedFragments"
    }

    fn leave_document(
        &mut self,
        ctx: &ValidationContext<'a>,
        _node: &'a Node,
        document: &'a ast::Document,
        errors: &mut ValidationErrorCollector,
    ) {
        let used: HashSet<&str> = document.operations()
            .flat_map(|(op_node, _)| ctx.recursively_referenced_fragments(op_node))
            .map(|(_, frag)| frag.name.as_str())
            .collect();
        for (frag_node, frag) in document.fragments() {
            if !used.contains(frag.name.as_str()) {
                errors.add_error(
                    ValidationErrorType::UnusedFragment,
                    frag_node.location(),
                    format!("Fragment `{}` is never used", frag.name),
                );
            }
        }
    }
}
