use crate::ast;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::traverser::TraversalControl;
use crate::traverser::TraverserContext;

pub type NodeContext<'a> = TraverserContext<'a, Node>;
pub type VisitResult<E> = Result<TraversalControl, E>;

/// Typed callbacks for a [`NodeTraverser`](crate::traverser::NodeTraverser)
/// walk: one `visit_*` method per [`NodeKind`], each handed the node, its
/// payload, and the traversal context. Every method defaults to
/// [`TraversalControl::Continue`].
///
/// [`NodeVisitor::leave_node()`] is called once a node's children have all
/// been visited.
#[allow(unused_variables)]
pub trait NodeVisitor<'a> {
    type Error;

    fn visit_document(
        &mut self,
        node: &'a Node,
        document: &'a ast::Document,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_operation_definition(
        &mut self,
        node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_variable_definition(
        &mut self,
        node: &'a Node,
        variable_definition: &'a ast::VariableDefinition,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_fragment_definition(
        &mut self,
        node: &'a Node,
        fragment_definition: &'a ast::FragmentDefinition,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_selection_set(
        &mut self,
        node: &'a Node,
        selection_set: &'a ast::SelectionSet,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_field(
        &mut self,
        node: &'a Node,
        field: &'a ast::Field,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_fragment_spread(
        &mut self,
        node: &'a Node,
        fragment_spread: &'a ast::FragmentSpread,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_inline_fragment(
        &mut self,
        node: &'a Node,
        inline_fragment: &'a ast::InlineFragment,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_argument(
        &mut self,
        node: &'a Node,
        argument: &'a ast::Argument,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_directive(
        &mut self,
        node: &'a Node,
        directive: &'a ast::Directive,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_type_name(
        &mut self,
        node: &'a Node,
        type_name: &'a ast::TypeName,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_list_type(
        &mut self,
        node: &'a Node,
        list_type: &'a ast::ListType,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_non_null_type(
        &mut self,
        node: &'a Node,
        non_null_type: &'a ast::NonNullType,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_null_value(
        &mut self,
        node: &'a Node,
        null_value: &'a ast::NullValue,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_int_value(
        &mut self,
        node: &'a Node,
        int_value: &'a ast::IntValue,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_float_value(
        &mut self,
        node: &'a Node,
        float_value: &'a ast::FloatValue,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_string_value(
        &mut self,
        node: &'a Node,
        string_value: &'a ast::StringValue,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_boolean_value(
        &mut self,
        node: &'a Node,
        boolean_value: &'a ast::BooleanValue,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_enum_value(
        &mut self,
        node: &'a Node,
        enum_value: &'a ast::EnumValue,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_list_value(
        &mut self,
        node: &'a Node,
        list_value: &'a ast::ListValue,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_object_value(
        &mut self,
        node: &'a Node,
        object_value: &'a ast::ObjectValue,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_object_field(
        &mut self,
        node: &'a Node,
        object_field: &'a ast::ObjectField,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn visit_variable_reference(
        &mut self,
        node: &'a Node,
        variable_reference: &'a ast::VariableReference,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }

    fn leave_node(
        &mut self,
        node: &'a Node,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<Self::Error> {
        Ok(TraversalControl::Continue)
    }
}

impl Node {
    /// Dispatches to the [`NodeVisitor`] method matching this node's kind.
    pub fn accept<'a, V: NodeVisitor<'a>>(
        &'a self,
        visitor: &mut V,
        ctx: &mut NodeContext<'a>,
    ) -> VisitResult<V::Error> {
        match self.kind() {
            NodeKind::Document(payload) => visitor.visit_document(self, payload, ctx),
            NodeKind::OperationDefinition(payload) => visitor.visit_operation_definition(self, payload, ctx),
            NodeKind::VariableDefinition(payload) => visitor.visit_variable_definition(self, payload, ctx),
            NodeKind::FragmentDefinition(payload) => visitor.visit_fragment_definition(self, payload, ctx),
            NodeKind::SelectionSet(payload) => visitor.visit_selection_set(self, payload, ctx),
            NodeKind::Field(payload) => visitor.visit_field(self, payload, ctx),
            NodeKind::FragmentSpread(payload) => visitor.visit_fragment_spread(self, payload, ctx),
            NodeKind::InlineFragment(payload) => visitor.visit_inline_fragment(self, payload, ctx),
            NodeKind::Argument(payload) => visitor.visit_argument(self, payload, ctx),
            NodeKind::Directive(payload) => visitor.visit_directive(self, payload, ctx),
            NodeKind::TypeName(payload) => visitor.visit_type_name(self, payload, ctx),
            NodeKind::ListType(payload) => visitor.visit_list_type(self, payload, ctx),
            NodeKind::NonNullType(payload) => visitor.visit_non_null_type(self, payload, ctx),
            NodeKind::NullValue(payload) => visitor.visit_null_value(self, payload, ctx),
            NodeKind::IntValue(payload) => visitor.visit_int_value(self, payload, ctx),
            NodeKind::FloatValue(payload) => visitor.visit_float_value(self, payload, ctx),
            NodeKind::StringValue(payload) => visitor.visit_string_value(self, payload, ctx),
            NodeKind::BooleanValue(payload) => visitor.visit_boolean_value(self, payload, ctx),
            NodeKind::EnumValue(payload) => visitor.visit_enum_value(self, payload, ctx),
            NodeKind::ListValue(payload) => visitor.visit_list_value(self, payload, ctx),
            NodeKind::ObjectValue(payload) => visitor.visit_object_value(self, payload, ctx),
            NodeKind::ObjectField(payload) => visitor.visit_object_field(self, payload, ctx),
            NodeKind::VariableReference(payload) => visitor.visit_variable_reference(self, payload, ctx),
        }
    }
}
