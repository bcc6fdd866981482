//! Compiling and running generated programs
//!
//! The crate does not ship a compiler. [`BuildService`] is the seam a caller
//! implements to turn program text into something runnable, so that
//! [`verify_round_trip`] can check a generated program against the document
//! it came from.

use super::compare::{compare_documents, Difference};
use super::program::{GenerationContext, SourceProgram};
use super::scope::ScopeConfiguration;
use crate::document::CadDocument;
use crate::error::Result;

/// Result of compiling a program
#[derive(Debug, Clone)]
pub struct BuildOutcome<M> {
    pub success: bool,
    /// Compiler messages, errors first
    pub diagnostics: Vec<String>,
    /// The compiled module when `success` is set
    pub module: Option<M>,
}

impl<M> BuildOutcome<M> {
    pub fn succeeded(module: M) -> Self {
        BuildOutcome {
            success: true,
            diagnostics: Vec::new(),
            module: Some(module),
        }
    }

    pub fn failed(diagnostics: Vec<String>) -> Self {
        BuildOutcome {
            success: false,
            diagnostics,
            module: None,
        }
    }
}

/// The function a generated program exposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    /// Path of the wrapper struct, e.g. `drawings::DrawingFactory`
    pub type_path: String,
    pub method: String,
}

impl EntryPoint {
    pub fn for_scope(scope: &ScopeConfiguration) -> Self {
        EntryPoint {
            type_path: scope.type_path(),
            method: "create_document".to_string(),
        }
    }
}

impl std::fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.type_path, self.method)
    }
}

/// Result of running a compiled program's entry point
#[derive(Debug)]
pub enum ExecutionOutcome {
    Document(CadDocument),
    /// The module has no function at the requested path
    EntryPointNotFound(String),
    Failed { message: String },
}

/// Compiles program text and runs its entry point
pub trait BuildService {
    /// Whatever the service produces from a successful build
    type Module;

    fn build(&self, program: &SourceProgram) -> BuildOutcome<Self::Module>;

    fn invoke(&self, module: &Self::Module, entry: &EntryPoint) -> ExecutionOutcome;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTripStatus {
    /// The rebuilt document matches the original
    Matched,
    Mismatched,
    BuildFailed,
    EntryPointNotFound,
    ExecutionFailed,
}

/// What happened when a generated program was built and run
#[derive(Debug, Clone)]
pub struct RoundTripReport {
    pub status: RoundTripStatus,
    /// Build or execution messages
    pub diagnostics: Vec<String>,
    pub differences: Vec<Difference>,
}

impl RoundTripReport {
    pub fn is_match(&self) -> bool {
        self.status == RoundTripStatus::Matched
    }

    fn failure(status: RoundTripStatus, diagnostics: Vec<String>) -> Self {
        RoundTripReport {
            status,
            diagnostics,
            differences: Vec::new(),
        }
    }
}

/// Generate a program for `document`, build and run it, and compare
///
/// The scope must keep the wrapper struct and the return statement, since
/// the entry point is expected to hand back the rebuilt document. Generation
/// errors are returned as `Err`; everything after that is reported.
pub fn verify_round_trip<S: BuildService>(
    service: &S,
    document: &CadDocument,
    scope: &ScopeConfiguration,
    context: &GenerationContext,
) -> Result<RoundTripReport> {
    let generated = super::generate(document, scope, context)?;

    let outcome = service.build(&generated.program);
    let module = match (outcome.success, outcome.module) {
        (true, Some(module)) => module,
        _ => {
            tracing::warn!(messages = outcome.diagnostics.len(), "generated program failed to build");
            return Ok(RoundTripReport::failure(
                RoundTripStatus::BuildFailed,
                outcome.diagnostics,
            ));
        }
    };

    let entry = EntryPoint::for_scope(scope);
    let rebuilt = match service.invoke(&module, &entry) {
        ExecutionOutcome::Document(doc) => doc,
        ExecutionOutcome::EntryPointNotFound(path) => {
            return Ok(RoundTripReport::failure(
                RoundTripStatus::EntryPointNotFound,
                vec![format!("entry point not found: {}", path)],
            ));
        }
        ExecutionOutcome::Failed { message } => {
            return Ok(RoundTripReport::failure(
                RoundTripStatus::ExecutionFailed,
                vec![message],
            ));
        }
    };

    let differences = compare_documents(document, &rebuilt);
    let status = if differences.is_empty() {
        RoundTripStatus::Matched
    } else {
        RoundTripStatus::Mismatched
    };
    tracing::debug!(?status, differences = differences.len(), "round trip finished");
    Ok(RoundTripReport {
        status,
        diagnostics: outcome.diagnostics,
        differences,
    })
}
