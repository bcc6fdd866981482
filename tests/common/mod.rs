//! Shared test utilities for acadgen integration tests.
//!
//! Generation helpers with a fixed context, plus line lookups used by the
//! ordering and scope tests. All test crates import this via `mod common;`.

#![allow(dead_code)]

pub mod builders;

use acadgen::types::datetime;
use acadgen::{
    generate, CadDocument, GeneratedProgram, GenerationContext, NotificationType,
    ScopeConfiguration,
};

/// Context used by the fixtures: fixed source name and timestamp.
pub fn fixed_context(source: &str) -> GenerationContext {
    GenerationContext::new()
        .with_source_name(source)
        .with_generated_at(datetime(2024, 5, 1, 12, 0, 0, 0))
}

/// Generate with the given scope and no header context.
pub fn generate_with(doc: &CadDocument, scope: &ScopeConfiguration) -> GeneratedProgram {
    generate(doc, scope, &GenerationContext::default())
        .unwrap_or_else(|e| panic!("generation failed: {e}"))
}

/// Generate with every toggle at its default.
pub fn generate_default(doc: &CadDocument) -> GeneratedProgram {
    generate_with(doc, &ScopeConfiguration::default())
}

/// Trimmed lines of a generated program.
pub fn lines(program: &GeneratedProgram) -> Vec<String> {
    program.text().lines().map(|l| l.trim().to_string()).collect()
}

/// Index of the first line containing `needle`.
///
/// ```ignore
/// let at = line_index(&program, "Layer::new(\"L1\")");
/// ```
pub fn line_index(program: &GeneratedProgram, needle: &str) -> usize {
    program
        .text()
        .lines()
        .position(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("no line containing {needle:?} in:\n{}", program.text()))
}

/// Does any line contain `needle`?
pub fn mentions(program: &GeneratedProgram, needle: &str) -> bool {
    program.text().lines().any(|l| l.contains(needle))
}

/// Count notifications of one type.
pub fn count_notifications(program: &GeneratedProgram, nt: NotificationType) -> usize {
    program.notifications.of_type(nt).len()
}

/// Count statements that register a construct with the document.
pub fn registration_count(program: &GeneratedProgram) -> usize {
    program
        .text()
        .lines()
        .filter(|l| {
            let l = l.trim();
            l.contains("doc.add_entity(")
                || l.contains("doc.add_object(")
                || (l.starts_with("doc.") && (l.contains(".add(") || l.contains(".replace(")))
        })
        .count()
}
