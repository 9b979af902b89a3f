use crate::ast::Node;
use crate::schema::Schema;
use crate::traverser::NodeTraverser;
use crate::validation::RuleFactory;
use crate::validation::RulesVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationErrorCollector;
use crate::validation::rules;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ValidationState {
    #[default]
    None,
    Running,
    Valid,
    Invalid,
}

/// Runs a set of [`Rule`](crate::validation::Rule)s over executable
/// documents.
///
/// Every rule sees every node of the document in a single traversal. Errors
/// never stop the traversal, so one pass reports everything the rules can
/// find.
#[derive(Clone, Debug)]
pub struct Validator {
    rules: Vec<RuleFactory>,
    state: ValidationState,
}
impl Validator {
    /// A validator running [`rules::standard_rules()`].
    pub fn new() -> Self {
        Self::with_rules(rules::standard_rules())
    }

    pub fn with_rules(rules: Vec<RuleFactory>) -> Self {
        Self {
            rules,
            state: ValidationState::None,
        }
    }

    pub fn rules(&self) -> &[RuleFactory] {
        &self.rules
    }

    /// The outcome of the most recent call to [`Validator::validate()`].
    pub fn state(&self) -> ValidationState {
        self.state
    }

    /// Validates `document` against `schema`.
    ///
    /// The returned errors are ordered by the document position of the node
    /// each was reported at. Errors reported at the same position keep the
    /// order they were reported in; errors without a location come last.
    pub fn validate(&mut self, schema: &Schema, document: &Node) -> Vec<ValidationError> {
        self.state = ValidationState::Running;

        let context = ValidationContext::new(schema, document);
        let rules = self.rules.iter()
            .map(|make_rule| make_rule(&context))
            .collect();
        let mut visitor = RulesVisitor {
            context,
            errors: ValidationErrorCollector::default(),
            rules,
        };
        let Ok(_) = NodeTraverser::traverse(document, &mut visitor);

        let mut errors = visitor.errors.into_errors();
        errors.sort_by_key(|err| {
            err.document_order_key().unwrap_or((usize::MAX, usize::MAX))
        });

        self.state = if errors.is_empty() {
            ValidationState::Valid
        } else {
            ValidationState::Invalid
        };
        log::debug!(
            "validated document against {} rule(s): {} error(s)",
            self.rules.len(),
            errors.len(),
        );
        errors
    }
}
impl std::default::Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
