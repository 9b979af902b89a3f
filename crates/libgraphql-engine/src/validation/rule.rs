use crate::ast;
use crate::ast::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;

/// Creates a fresh instance of a rule for one validation pass.
pub type RuleFactory = for<'a> fn(&ValidationContext<'a>) -> Box<dyn Rule<'a> + 'a>;

/// One independent validation check.
///
/// A rule observes the nodes of a document in traversal order through its
/// `check_*` methods (called as a node is entered) and `leave_*` methods
/// (called once all of a node's children have been visited). Every method
/// defaults to doing nothing. Rules report problems through the
/// [`ValidationErrorCollector`] and never stop the traversal.
#[allow(unused_variables)]
pub trait Rule<'a> {
    fn name(&self) -> &'static str;

    fn check_argument(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        argument: &'a ast::Argument,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_directive(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        directive: &'a ast::Directive,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_document(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        document: &'a ast::Document,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_field(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        field: &'a ast::Field,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_fragment_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        fragment_definition: &'a ast::FragmentDefinition,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_fragment_spread(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        fragment_spread: &'a ast::FragmentSpread,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_inline_fragment(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        inline_fragment: &'a ast::InlineFragment,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_operation_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_selection_set(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        selection_set: &'a ast::SelectionSet,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_type_name(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        type_name: &'a ast::TypeName,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_variable_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        variable_definition: &'a ast::VariableDefinition,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn check_variable_reference(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        variable_reference: &'a ast::VariableReference,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn leave_document(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        document: &'a ast::Document,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn leave_operation_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        errors: &mut ValidationErrorCollector,
    ) {}

    fn leave_selection_set(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        selection_set: &'a ast::SelectionSet,
        errors: &mut ValidationErrorCollector,
    ) {}
}
