use crate::ast::NodeKind;
use crate::types::DirectiveAnnotation;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl DeprecationState<'_> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}

impl<'a> std::convert::From<&'a Vec<DirectiveAnnotation>> for DeprecationState<'a> {
    fn from(value: &'a Vec<DirectiveAnnotation>) -> DeprecationState<'a> {
        let directive_annot = value.iter().find(|directive_annot| {
            directive_annot.directive_name() == "deprecated"
        });
        match directive_annot {
            Some(directive_annot) => DeprecationState::Deprecated(
                match directive_annot.argument("reason").map(|node| node.kind()) {
                    Some(NodeKind::StringValue(reason)) => reason.value.as_str(),
                    _ => DEFAULT_DEPRECATION_REASON,
                },
            ),
            None => DeprecationState::NotDeprecated,
        }
    }
}
