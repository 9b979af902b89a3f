use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct UniqueFragmentNames<'a> {
    seen: HashSet<&'a str>,
}
impl<'a> Rule<'a> for UniqueFragmentNames<'a> {
    fn name(&self) -> &'static str {
        "UniqueFragmentNames"
    }

    fn check_fragment_definition(
        &mut self,
        _ctx: &ValidationContext<'a>,
        node: &'a Node,
        fragment_definition: &'a ast::FragmentDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        let frag_name = fragment_definition.name.as_str();
        if !self.seen.insert(frag_name) {
            errors.add_error(
                ValidationErrorType::DuplicateFragmentName,
                node.location(),
                format!("There can be only one fragment named `{frag_name}`"),
            );
        }
    }
}
