use crate::instrumentation::Instrumentation;

/// Observes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopInstrumentation;
impl Instrumentation for NoopInstrumentation {}
