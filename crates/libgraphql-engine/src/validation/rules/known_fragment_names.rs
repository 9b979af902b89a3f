use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

#[derive(Debug, Default)]
pub struct KnownFragmentNames;
impl<'a> Rule<'a> for KnownFragmentNames {
    fn name(&self) -> &'static str {
        "KnownFragmentNames"
    }

    fn check_fragment_spread(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        fragment_spread: &'a ast::FragmentSpread,
        errors: &mut ValidationErrorCollector,
    ) {
        if ctx.fragment(fragment_spread.fragment_name.as_str()).is_none() {
            errors.add_error(
                ValidationErrorType::UndefinedFragment,
                node.location(),
                format!("Undefined fragment `{}`", fragment_spread.fragment_name),
            );
        }
    }
}
