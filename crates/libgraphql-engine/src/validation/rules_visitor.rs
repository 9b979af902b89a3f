use crate::ast;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::traverser::NodeContext;
use crate::traverser::NodeVisitor;
use crate::traverser::TraversalControl;
use crate::traverser::VisitResult;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use std::convert::Infallible;

/// Fans each node of one [`NodeTraverser`](crate::traverser::NodeTraverser)
/// pass out to every rule, keeping the [`ValidationContext`]'s type
/// information current along the way.
pub(crate) struct RulesVisitor<'a> {
    pub(super) context: ValidationContext<'a>,
    pub(super) errors: ValidationErrorCollector,
    pub(super) rules: Vec<Box<dyn Rule<'a> + 'a>>,
}
impl<'a> RulesVisitor<'a> {
    fn dispatch(
        &mut self,
        ctx: &NodeContext<'a>,
        mut check: impl FnMut(
            &mut (dyn Rule<'a> + 'a),
            &ValidationContext<'a>,
            &mut ValidationErrorCollector,
        ),
    ) -> VisitResult<Infallible> {
        self.context.type_info.parent_node = ctx.parent();
        for rule in self.rules.iter_mut() {
            self.errors.set_current_rule(rule.name());
            check(rule.as_mut(), &self.context, &mut self.errors);
        }
        Ok(TraversalControl::Continue)
    }

    fn named_output_type(&self, type_annot: &TypeAnnotation) -> Option<&'a GraphQLType> {
        self.context.schema().get_type(
            type_annot.innermost_named_type_annotation().graphql_type_name(),
        )
    }

    fn type_condition(&self, type_condition: Option<&Node>) -> Option<&'a GraphQLType> {
        match type_condition.and_then(|node| node.as_type_name()) {
            Some(type_name) => self.context.schema().get_type(type_name.name.as_str()),
            None => self.context.type_info.current_output_type(),
        }
    }
}
impl<'a> NodeVisitor<'a> for RulesVisitor<'a> {
    type Error = Infallible;

    fn visit_document(
        &mut self,
        node: &'a Node,
        document: &'a ast::Document,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        self.dispatch(ctx, |rule, vctx, errors| rule.check_document(vctx, node, document, errors))
    }

    fn visit_operation_definition(
        &mut self,
        node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        let schema = self.context.schema();
        let root_type = schema
            .root_operation_type(operation_definition.operation)
            .and_then(|root_type| schema.get_type(root_type.name()));
        self.context.type_info.operation = Some(operation_definition);
        self.context.type_info.output_types.push(root_type);
        self.dispatch(ctx, |rule, vctx, errors| {
            rule.check_operation_definition(vctx, node, operation_definition, errors)
        })
    }

    fn visit_variable_definition(
        &mut self,
        node: &'a Node,
        variable_definition: &'a ast::VariableDefinition,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        self.context.type_info.input_type =
            TypeAnnotation::from_ast_node(&variable_definition.var_type)
                .filter(|type_annot| {
                    self.named_output_type(type_annot)
                        .is_some_and(GraphQLType::is_input_type)
                });
        self.dispatch(ctx, |rule, vctx, errors| {
            rule.check_variable_definition(vctx, node, variable_definition, errors)
        })
    }

    fn visit_fragment_definition(
        &mut self,
        node: &'a Node,
        fragment_definition: &'a ast::FragmentDefinition,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        let type_condition = self.type_condition(Some(fragment_definition.type_condition.as_ref()));
        self.context.type_info.output_types.push(type_condition);
        self.dispatch(ctx, |rule, vctx, errors| {
            rule.check_fragment_definition(vctx, node, fragment_definition, errors)
        })
    }

    fn visit_selection_set(
        &mut self,
        node: &'a Node,
        selection_set: &'a ast::SelectionSet,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        let parent_type = self.context.type_info.current_output_type()
            .filter(|type_| type_.is_composite());
        self.context.type_info.parent_types.push(parent_type);
        self.dispatch(ctx, |rule, vctx, errors| {
            rule.check_selection_set(vctx, node, selection_set, errors)
        })
    }

    fn visit_field(
        &mut self,
        node: &'a Node,
        field: &'a ast::Field,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        let field_def = self.context.parent_type().and_then(|parent_type| {
            self.context.schema().field_definition(parent_type, field.name.as_str())
        });
        let output_type = field_def.and_then(|field_def| {
            self.named_output_type(field_def.type_annotation())
        });
        self.context.type_info.field_defs.push(field_def);
        self.context.type_info.output_types.push(output_type);
        self.dispatch(ctx, |rule, vctx, errors| rule.check_field(vctx, node, field, errors))
    }

    fn visit_fragment_spread(
        &mut self,
        node: &'a Node,
        fragment_spread: &'a ast::FragmentSpread,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        self.dispatch(ctx, |rule, vctx, errors| {
            rule.check_fragment_spread(vctx, node, fragment_spread, errors)
        })
    }

    fn visit_inline_fragment(
        &mut self,
        node: &'a Node,
        inline_fragment: &'a ast::InlineFragment,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        let type_condition = self.type_condition(inline_fragment.type_condition.as_deref());
        self.context.type_info.output_types.push(type_condition);
        self.dispatch(ctx, |rule, vctx, errors| {
            rule.check_inline_fragment(vctx, node, inline_fragment, errors)
        })
    }

    fn visit_argument(
        &mut self,
        node: &'a Node,
        argument: &'a ast::Argument,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        let parameters = match ctx.parent().map(Node::kind) {
            Some(NodeKind::Directive(_)) =>
                self.context.directive().map(|directive| directive.parameters()),
            Some(NodeKind::Field(_)) =>
                self.context.field_definition().map(|field_def| field_def.parameters()),
            _ => None,
        };
        self.context.type_info.argument = parameters
            .and_then(|params| params.get(argument.name.as_str()));
        self.dispatch(ctx, |rule, vctx, errors| rule.check_argument(vctx, node, argument, errors))
    }

    fn visit_directive(
        &mut self,
        node: &'a Node,
        directive: &'a ast::Directive,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        self.context.type_info.directive = self.context.schema().directive(directive.name.as_str());
        self.dispatch(ctx, |rule, vctx, errors| rule.check_directive(vctx, node, directive, errors))
    }

    fn visit_type_name(
        &mut self,
        node: &'a Node,
        type_name: &'a ast::TypeName,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        self.dispatch(ctx, |rule, vctx, errors| rule.check_type_name(vctx, node, type_name, errors))
    }

    fn visit_variable_reference(
        &mut self,
        node: &'a Node,
        variable_reference: &'a ast::VariableReference,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        self.dispatch(ctx, |rule, vctx, errors| {
            rule.check_variable_reference(vctx, node, variable_reference, errors)
        })
    }

    fn leave_node(
        &mut self,
        node: &'a Node,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Infallible> {
        match node.kind() {
            NodeKind::Document(document) => {
                self.dispatch(ctx, |rule, vctx, errors| {
                    rule.leave_document(vctx, node, document, errors)
                })?;
            },
            NodeKind::OperationDefinition(operation_definition) => {
                self.dispatch(ctx, |rule, vctx, errors| {
                    rule.leave_operation_definition(vctx, node, operation_definition, errors)
                })?;
                self.context.type_info.operation = None;
                self.context.type_info.output_types.pop();
            },
            NodeKind::VariableDefinition(_) =>
                self.context.type_info.input_type = None,
            NodeKind::FragmentDefinition(_) | NodeKind::InlineFragment(_) => {
                self.context.type_info.output_types.pop();
            },
            NodeKind::SelectionSet(selection_set) => {
                self.dispatch(ctx, |rule, vctx, errors| {
                    rule.leave_selection_set(vctx, node, selection_set, errors)
                })?;
                self.context.type_info.parent_types.pop();
            },
            NodeKind::Field(_) => {
                self.context.type_info.field_defs.pop();
                self.context.type_info.output_types.pop();
            },
            NodeKind::Argument(_) =>
                self.context.type_info.argument = None,
            NodeKind::Directive(_) =>
                self.context.type_info.directive = None,
            _ => (),
        }
        Ok(TraversalControl::Continue)
    }
}
