//! Source code generation
//!
//! A generation call runs three passes over a borrowed document:
//!
//! 1. **Resolve** - collect the constructs in scope, drop the ones still at
//!    their defaults and order the rest so every reference is bound before
//!    it is used ([`resolve`])
//! 2. **Format** - render each step as statements ([`emit`], [`format`])
//! 3. **Emit** - lay the statements out as a complete program
//!
//! Calls share nothing mutable, so independent documents can be generated
//! in parallel with [`generate_batch`].

mod build;
mod compare;
mod defaults;
mod describe;
mod emit;
mod format;
mod kind;
mod naming;
mod opaque;
mod program;
mod resolve;
mod scope;
mod value;

pub use build::{
    verify_round_trip, BuildOutcome, BuildService, EntryPoint, ExecutionOutcome, RoundTripReport,
    RoundTripStatus,
};
pub use compare::{compare_documents, Difference};
pub use defaults::{fresh_document, DefaultRegistry};
pub use describe::Construct;
pub use format::{escape_string, format_f64};
pub use kind::{ConstructKind, Registration};
pub use naming::sanitize;
pub use program::{GeneratedProgram, GenerationContext, SourceProgram};
pub use scope::{EntityScope, ObjectScope, ScopeConfiguration, TableScope};
pub use value::{Constructor, Module, Property, Reference, TableRef, Value};

use crate::document::CadDocument;
use crate::error::{CadError, Result};
use crate::notification::NotificationCollection;
use rayon::prelude::*;

/// Progress of one generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Resolving,
    Formatting,
    Emitting,
    Done,
}

struct Generation {
    state: GenerationState,
}

impl Generation {
    fn new() -> Self {
        Generation {
            state: GenerationState::Idle,
        }
    }

    fn advance(&mut self, next: GenerationState) {
        tracing::debug!(from = ?self.state, to = ?next, "generation state");
        self.state = next;
    }
}

/// Generate a program that rebuilds `document`
///
/// Non-fatal issues (unsupported constructs, degraded references, broken
/// cycles) are returned as notifications alongside the program. The
/// document is only read.
pub fn generate(
    document: &CadDocument,
    scope: &ScopeConfiguration,
    context: &GenerationContext,
) -> Result<GeneratedProgram> {
    let mut run = Generation::new();
    let mut notifications = NotificationCollection::new();

    run.advance(GenerationState::Resolving);
    let plan = resolve::resolve(document, scope, &mut notifications)?;

    run.advance(GenerationState::Formatting);
    let body = emit::emit_body(&plan, scope, &mut notifications)?;

    run.advance(GenerationState::Emitting);
    let program = emit::assemble(scope, context, &body);

    run.advance(GenerationState::Done);
    tracing::info!(
        lines = program.line_count(),
        notifications = notifications.len(),
        "generated program"
    );
    Ok(GeneratedProgram {
        program,
        notifications,
    })
}

/// [`generate`] for callers whose document may be absent
pub fn generate_optional(
    document: Option<&CadDocument>,
    scope: &ScopeConfiguration,
    context: &GenerationContext,
) -> Result<GeneratedProgram> {
    match document {
        Some(document) => generate(document, scope, context),
        None => Err(CadError::MissingDocument),
    }
}

/// Generate programs for many documents in parallel, one result each
pub fn generate_batch(
    documents: &[(&CadDocument, GenerationContext)],
    scope: &ScopeConfiguration,
) -> Vec<Result<GeneratedProgram>> {
    documents
        .par_iter()
        .map(|(document, context)| generate(document, scope, context))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Layer;

    #[test]
    fn test_missing_document() {
        let result = generate_optional(
            None,
            &ScopeConfiguration::default(),
            &GenerationContext::default(),
        );
        assert!(matches!(result, Err(CadError::MissingDocument)));
    }

    #[test]
    fn test_empty_document_program() {
        let doc = CadDocument::new();
        let generated = generate(
            &doc,
            &ScopeConfiguration::default(),
            &GenerationContext::default(),
        )
        .unwrap();
        let expected = "\
// Generated by acadgen 0.1.0

use acadgen::{CadDocument, Result};

pub struct DrawingFactory;

impl DrawingFactory {
    pub fn create_document() -> Result<CadDocument> {
        let mut doc = CadDocument::new();

        Ok(doc)
    }
}
";
        assert_eq!(generated.text(), expected);
        assert!(generated.notifications.is_empty());
    }

    #[test]
    fn test_batch_matches_sequential() {
        let mut a = CadDocument::new();
        a.layers.add(Layer::new("A")).unwrap();
        let b = CadDocument::new();
        let scope = ScopeConfiguration::default();
        let inputs = vec![
            (&a, GenerationContext::new().with_source_name("a.dxf")),
            (&b, GenerationContext::new().with_source_name("b.dxf")),
        ];
        let results = generate_batch(&inputs, &scope);
        assert_eq!(results.len(), 2);
        for ((doc, ctx), result) in inputs.iter().zip(results) {
            let expected = generate(doc, &scope, ctx).unwrap();
            assert_eq!(result.unwrap().program, expected.program);
        }
    }
}
