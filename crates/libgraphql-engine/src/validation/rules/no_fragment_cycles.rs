use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashSet;

/// Fragments must not spread themselves, directly or through other fragments.
/// Each cycle is reported once, at the fragment it leads back to.
#[derive(Debug, Default)]
pub struct NoFragmentCycles<'a> {
    visited: HashSet<&'a str>,
}
impl<'a> NoFragmentCycles<'a> {
    fn detect_cycles(
        &mut self,
        ctx: &ValidationContext<'a>,
        fragment_name: &'a str,
        path: &mut Vec<&'a str>,
        errors: &mut ValidationErrorCollector,
    ) {
        if !self.visited.insert(fragment_name) {
            return;
        }
        let fragment_node = match ctx.fragment_node(fragment_name) {
            Some(node) => node,
            None => return,
        };

        path.push(fragment_name);
        for spread in ctx.fragment_spreads(fragment_node) {
            let spread_name = spread.fragment_name.as_str();
            match path.iter().position(|name| *name == spread_name) {
                Some(cycle_start) => {
                    let via = path[cycle_start + 1..].iter()
                        .map(|name| format!("`{name}`"))
                        .collect::<Vec<_>>();
                    let message =
                        if via.is_empty() {
                            format!("Fragment `{spread_name}` can not spread itself")
                        } else {
                            format!(
                                "Fragment `{spread_name}` can not spread itself via {}",
                                via.join(", "),
                            )
                        };
                    let location = ctx.fragment_node(spread_name).and_then(Node::location);
                    errors.add_error(ValidationErrorType::FragmentCycle, location, message);
                },
                None => self.detect_cycles(ctx, spread_name, path, errors),
            }
        }
        path.pop();
    }
}
impl<'a> Rule<'a> for NoFragmentCycles<'a> {
    fn name(&self) -> &'static str {
        "NoFragmentCycles"
    }

    fn check_fragment_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        _node: &'a Node,
        fragment_definition: &'a ast::FragmentDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        let mut path = vec![];
        self.detect_cycles(ctx, fragment_definition.name.as_str(), &mut path, errors);
    }
}
