//! End-to-end scenarios: exact output, round trip and default elision.

mod common;

use acadgen::{
    compare_documents, generate, verify_round_trip, BuildOutcome, BuildService, CadDocument,
    EntryPoint, ExecutionOutcome, NotificationType, RoundTripStatus, ScopeConfiguration,
    SourceProgram,
};
use common::builders::{full_document, scenario_a, scenario_b, scenario_c};
use common::*;

/// The checked-in output for scenario A, compiled into this test crate
mod scenario_a_program {
    include!("fixtures/scenario_a.rs");
}

const SCENARIO_A_TEXT: &str = include_str!("fixtures/scenario_a.rs");

/// The checked-in output for [`full_document`], every generatable kind
mod full_document_program {
    include!("fixtures/full_document.rs");
}

const FULL_DOCUMENT_TEXT: &str = include_str!("fixtures/full_document.rs");

/// Build service backed by programs compiled ahead of time
///
/// "Building" succeeds only for program text that matches a known fixture
/// byte for byte; running it calls the compiled fixture.
struct FixtureService;

type Factory = fn() -> acadgen::Result<CadDocument>;

impl BuildService for FixtureService {
    type Module = Factory;

    fn build(&self, program: &SourceProgram) -> BuildOutcome<Factory> {
        if program.text() == SCENARIO_A_TEXT {
            BuildOutcome::succeeded(scenario_a_program::DrawingFactory::create_document)
        } else if program.text() == FULL_DOCUMENT_TEXT {
            BuildOutcome::succeeded(full_document_program::DrawingFactory::create_document)
        } else {
            BuildOutcome::failed(vec!["no compiled fixture matches this program".to_string()])
        }
    }

    fn invoke(&self, module: &Factory, entry: &EntryPoint) -> ExecutionOutcome {
        if entry.type_path != "DrawingFactory" || entry.method != "create_document" {
            return ExecutionOutcome::EntryPointNotFound(entry.to_string());
        }
        match module() {
            Ok(doc) => ExecutionOutcome::Document(doc),
            Err(e) => ExecutionOutcome::Failed {
                message: e.to_string(),
            },
        }
    }
}

// ===========================================================================
// Scenario A: two layers, two lines
// ===========================================================================

#[test]
fn scenario_a_matches_fixture() {
    let generated = generate(
        &scenario_a(),
        &ScopeConfiguration::default(),
        &fixed_context("scenario_a.dxf"),
    )
    .unwrap();
    assert_eq!(generated.text(), SCENARIO_A_TEXT);
    assert!(generated.notifications.is_empty());
}

#[test]
fn scenario_a_declares_layers_before_lines() {
    let program = generate_default(&scenario_a());
    let l1 = line_index(&program, "Layer::new(\"L1\")");
    let l2 = line_index(&program, "Layer::new(\"L2\")");
    let first_line = line_index(&program, "Line::new(");
    assert!(l1 < l2);
    assert!(l2 < first_line);
}

#[test]
fn scenario_a_fixture_rebuilds_the_document() {
    let rebuilt = scenario_a_program::DrawingFactory::create_document().unwrap();
    let user_layers: Vec<_> = rebuilt
        .layers
        .iter()
        .map(|l| l.name.as_str())
        .filter(|n| *n != "0")
        .collect();
    assert_eq!(user_layers, vec!["L1", "L2"]);
    assert_eq!(rebuilt.entity_count(), 2);

    let layers: Vec<_> = rebuilt.entities().map(|e| e.common().layer.clone()).collect();
    assert_eq!(layers, vec!["L1", "L2"]);
    assert!(compare_documents(&scenario_a(), &rebuilt).is_empty());
}

#[test]
fn scenario_a_round_trip_through_build_service() {
    let report = verify_round_trip(
        &FixtureService,
        &scenario_a(),
        &ScopeConfiguration::default(),
        &fixed_context("scenario_a.dxf"),
    )
    .unwrap();
    assert_eq!(report.status, RoundTripStatus::Matched, "{:?}", report.differences);
}

#[test]
fn round_trip_reports_build_failure_for_unknown_program() {
    let report = verify_round_trip(
        &FixtureService,
        &scenario_b(),
        &ScopeConfiguration::default(),
        &fixed_context("scenario_b.dxf"),
    )
    .unwrap();
    assert_eq!(report.status, RoundTripStatus::BuildFailed);
    assert!(report.differences.is_empty());
}

// ===========================================================================
// Scenario B: header at defaults
// ===========================================================================

#[test]
fn scenario_b_has_no_header_section() {
    let program = generate_default(&scenario_b());
    assert!(!mentions(&program, "doc.header."));
    assert!(!mentions(&program, "// Header variables"));
    assert!(mentions(&program, "Circle::new(Vector3::ZERO, 3.0)"));
}

#[test]
fn changed_header_variable_gets_its_own_section() {
    let mut doc = scenario_b();
    doc.header.linetype_scale = 4.0;
    let program = generate_default(&doc);
    let section = line_index(&program, "// Header variables");
    let assignment = line_index(&program, "doc.header.linetype_scale = 4.0;");
    assert_eq!(assignment, section + 1);
    assert!(assignment < line_index(&program, "Circle::new("));
}

// ===========================================================================
// Scenario C: one changed raster variable
// ===========================================================================

#[test]
fn scenario_c_emits_exactly_one_assignment() {
    let program = generate_default(&scenario_c());
    let assignments: Vec<_> = lines(&program)
        .into_iter()
        .filter(|l| l.starts_with("raster_variables_1."))
        .collect();
    assert_eq!(assignments, vec!["raster_variables_1.display_frame = false;"]);
    assert!(mentions(
        &program,
        "doc.add_object(ObjectType::RasterVariables(raster_variables_1))?;"
    ));
    assert!(mentions(&program, "use acadgen::objects::*;"));
}

// ===========================================================================
// Full document: every generatable kind and a block cycle
// ===========================================================================

#[test]
fn full_document_matches_fixture() {
    let generated = generate(
        &full_document(),
        &ScopeConfiguration::default(),
        &fixed_context("full_document.dxf"),
    )
    .unwrap();
    assert_eq!(generated.text(), FULL_DOCUMENT_TEXT);
    assert_eq!(count_notifications(&generated, NotificationType::ForwardDeclared), 1);
    assert_eq!(generated.notifications.len(), 1);
}

#[test]
fn full_document_fixture_rebuilds_the_document() {
    let rebuilt = full_document_program::DrawingFactory::create_document().unwrap();
    let differences = compare_documents(&full_document(), &rebuilt);
    assert!(differences.is_empty(), "{:?}", differences);

    // Objects land in native order, not the order they were added in
    let kinds: Vec<_> = rebuilt.objects().map(|o| o.object_type()).collect();
    let original: Vec<_> = full_document().objects().map(|o| o.object_type()).collect();
    assert_ne!(kinds, original);
    assert_eq!(kinds.len(), original.len());
}

#[test]
fn full_document_round_trip_through_build_service() {
    let report = verify_round_trip(
        &FixtureService,
        &full_document(),
        &ScopeConfiguration::default(),
        &fixed_context("full_document.dxf"),
    )
    .unwrap();
    assert_eq!(report.status, RoundTripStatus::Matched, "{:?}", report.differences);
}
