use crate::ast;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashSet;

/// What a [`Rule`](crate::validation::Rule) can see while a document is being
/// validated: the schema and document, plus type information for the node
/// currently being visited.
pub struct ValidationContext<'a> {
    document: &'a Node,
    fragments: IndexMap<&'a str, &'a Node>,
    schema: &'a Schema,
    pub(super) type_info: TypeInfo<'a>,
}
impl<'a> ValidationContext<'a> {
    pub(crate) fn new(schema: &'a Schema, document: &'a Node) -> Self {
        let mut fragments = IndexMap::new();
        if let Some(doc) = document.as_document() {
            for (node, frag) in doc.fragments() {
                fragments.entry(frag.name.as_str()).or_insert(node);
            }
        }
        Self {
            document,
            fragments,
            schema,
            type_info: TypeInfo::default(),
        }
    }

    /// The argument definition (of a field or directive) for the argument
    /// currently being visited.
    pub fn argument(&self) -> Option<&'a Parameter> {
        self.type_info.argument
    }

    /// The directive definition for the directive currently being visited.
    pub fn directive(&self) -> Option<&'a Directive> {
        self.type_info.directive
    }

    pub fn document(&self) -> &'a Node {
        self.document
    }

    /// The definition of the field currently being visited.
    pub fn field_definition(&self) -> Option<&'a Field> {
        self.type_info.field_defs.last().copied().flatten()
    }

    /// The first fragment definition named `name`.
    pub fn fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).and_then(|node| node.as_fragment_definition())
    }

    pub fn fragment_node(&self, name: &str) -> Option<&'a Node> {
        self.fragments.get(name).copied()
    }

    /// The declared type of the variable definition currently being visited,
    /// when it names a known input type.
    pub fn input_type(&self) -> Option<&TypeAnnotation> {
        self.type_info.input_type.as_ref()
    }

    /// The operation currently being visited. `None` inside fragment
    /// definitions.
    pub fn operation(&self) -> Option<&'a ast::OperationDefinition> {
        self.type_info.operation
    }

    /// The parent of the node currently being visited.
    pub fn parent_node(&self) -> Option<&'a Node> {
        self.type_info.parent_node
    }

    /// The composite type whose fields the enclosing selection set selects.
    pub fn parent_type(&self) -> Option<&'a GraphQLType> {
        self.type_info.parent_types.last().copied().flatten()
    }

    /// Every fragment spread under `node`, not following the spreads
    /// themselves.
    pub fn fragment_spreads(&self, node: &'a Node) -> Vec<&'a ast::FragmentSpread> {
        let mut spreads = vec![];
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            if let NodeKind::FragmentSpread(spread) = node.kind() {
                spreads.push(spread);
            }
            stack.extend(node.children().into_iter().rev());
        }
        spreads
    }

    /// Every fragment definition reachable from `node` through fragment
    /// spreads, each listed once, in the order first reached.
    pub fn recursively_referenced_fragments(
        &self,
        node: &'a Node,
    ) -> Vec<(&'a Node, &'a ast::FragmentDefinition)> {
        let mut fragments = vec![];
        let mut seen = HashSet::new();
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            for spread in self.fragment_spreads(node) {
                let name = spread.fragment_name.as_str();
                if !seen.insert(name) {
                    continue;
                }
                if let Some(frag_node) = self.fragment_node(name) {
                    if let Some(frag) = frag_node.as_fragment_definition() {
                        fragments.push((frag_node, frag));
                        stack.push(frag_node);
                    }
                }
            }
        }
        fragments
    }

    /// Every variable reference under `node` and under the fragments it
    /// (transitively) spreads.
    pub fn recursive_variable_usages(
        &self,
        node: &'a Node,
    ) -> Vec<(&'a Node, &'a ast::VariableReference)> {
        let mut usages = variable_references(node);
        for (frag_node, _) in self.recursively_referenced_fragments(node) {
            usages.extend(variable_references(frag_node));
        }
        usages
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }
}

fn variable_references(node: &Node) -> Vec<(&Node, &ast::VariableReference)> {
    let mut refs = vec![];
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        if let NodeKind::VariableReference(var_ref) = node.kind() {
            refs.push((node, var_ref));
        }
        stack.extend(node.children().into_iter().rev());
    }
    refs
}

/// Type information tracked by the
/// [`RulesVisitor`](crate::validation::RulesVisitor) as it walks a document.
#[derive(Default)]
pub(super) struct TypeInfo<'a> {
    pub(super) argument: Option<&'a Parameter>,
    pub(super) directive: Option<&'a Directive>,
    pub(super) field_defs: Vec<Option<&'a Field>>,
    pub(super) input_type: Option<TypeAnnotation>,
    pub(super) operation: Option<&'a ast::OperationDefinition>,
    pub(super) output_types: Vec<Option<&'a GraphQLType>>,
    pub(super) parent_node: Option<&'a Node>,
    pub(super) parent_types: Vec<Option<&'a GraphQLType>>,
}
impl<'a> TypeInfo<'a> {
    pub(super) fn current_output_type(&self) -> Option<&'a GraphQLType> {
        self.output_types.last().copied().flatten()
    }
}
