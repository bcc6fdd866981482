//! Reference discovery and emission ordering
//!
//! The resolver turns a document into an ordered list of plan steps. Every
//! construct in scope becomes an [`EmissionUnit`]; references between units
//! become edges of a dependency graph, and a depth-first walk in native
//! order yields the emission sequence. A dependency on a unit that is still
//! being visited is a cycle: table entries break it by being declared early
//! and populated later, anything else fails the call.

use super::defaults::{fresh_document, DefaultRegistry};
use super::describe::Construct;
use super::kind::ConstructKind;
use super::scope::ScopeConfiguration;
use super::value::{Constructor, Property, Reference, TableRef};
use crate::document::CadDocument;
use crate::entities::EntityType;
use crate::error::{CadError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use crate::objects::ObjectType;
use crate::tables::{Table, TableEntry};
use crate::types::Handle;
use ahash::{AHashMap, AHashSet};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

/// Where a unit's data lives in the source document
#[derive(Clone, Copy)]
pub enum Source<'a> {
    Header,
    Table(&'a dyn Construct),
    Entity(&'a EntityType),
    Object(&'a ObjectType),
}

impl std::fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Header => write!(f, "Header"),
            Source::Table(t) => write!(f, "Table({:?})", t.kind()),
            Source::Entity(e) => write!(f, "Entity({})", e.entity_type()),
            Source::Object(o) => write!(f, "Object({})", o.object_type()),
        }
    }
}

/// An entity owned by a block, emitted inline with it
#[derive(Debug)]
pub struct ChildUnit<'a> {
    pub kind: ConstructKind,
    pub entity: &'a EntityType,
    pub constructor: Constructor,
    /// Properties differing from the kind's baseline
    pub properties: Vec<Property>,
}

/// One construct awaiting emission
#[derive(Debug)]
pub struct EmissionUnit<'a> {
    pub kind: ConstructKind,
    /// Human-readable identity, e.g. `Layer "L1"` or `Line #2`
    pub label: String,
    pub name: Option<String>,
    pub source: Source<'a>,
    pub constructor: Constructor,
    /// Properties differing from the kind's baseline
    pub properties: Vec<Property>,
    pub children: Vec<ChildUnit<'a>>,
    /// Indices of the units this one references
    pub dependencies: Vec<usize>,
    /// Entry already present in a new document; registered with `replace`
    pub standard: bool,
    pub handle: Option<Handle>,
    pub referenced_by_name: bool,
    pub referenced_by_handle: bool,
    pub forward_declared: bool,
}

impl EmissionUnit<'_> {
    /// Every reference held by the unit, its children included
    pub fn references(&self) -> Vec<Reference> {
        let mut refs = Vec::new();
        collect_refs(&self.constructor, &self.properties, &mut refs);
        for child in &self.children {
            collect_refs(&child.constructor, &child.properties, &mut refs);
        }
        refs
    }
}

fn collect_refs(ctor: &Constructor, properties: &[Property], out: &mut Vec<Reference>) {
    for arg in &ctor.args {
        out.extend(arg.references().into_iter().cloned());
    }
    for property in properties {
        out.extend(property.value.references().into_iter().cloned());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Construct, assign, register
    Complete,
    /// Construct and register with no properties, to break a cycle
    Declare,
    /// Assign the properties of a declared unit and re-register it
    Populate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanStep {
    pub unit: usize,
    pub phase: Phase,
}

/// Units in native order plus the steps emitting them
#[derive(Debug)]
pub struct ResolvedPlan<'a> {
    pub units: Vec<EmissionUnit<'a>>,
    pub steps: Vec<PlanStep>,
    names: AHashMap<(TableRef, String), usize>,
    handles: AHashMap<Handle, usize>,
}

impl<'a> ResolvedPlan<'a> {
    /// Unit holding the named table entry, if it is emitted
    pub fn unit_for_name(&self, table: TableRef, name: &str) -> Option<usize> {
        self.names.get(&(table, name.to_uppercase())).copied()
    }

    /// Unit registered under the handle, if it is emitted
    pub fn unit_for_handle(&self, handle: Handle) -> Option<usize> {
        if handle.is_null() {
            return None;
        }
        self.handles.get(&handle).copied()
    }

    pub fn forward_declarations(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.phase == Phase::Declare)
            .count()
    }
}

/// Table a kind's entries are looked up in by name
pub fn table_ref(kind: ConstructKind) -> Option<TableRef> {
    match kind {
        ConstructKind::Layer => Some(TableRef::Layer),
        ConstructKind::LineType => Some(TableRef::LineType),
        ConstructKind::TextStyle | ConstructKind::ShapeStyle => Some(TableRef::TextStyle),
        ConstructKind::DimStyle => Some(TableRef::DimStyle),
        ConstructKind::Block => Some(TableRef::Block),
        ConstructKind::MLineStyle => Some(TableRef::MLineStyle),
        _ => None,
    }
}

/// Build the emission plan for a document
pub fn resolve<'a>(
    document: &'a CadDocument,
    scope: &ScopeConfiguration,
    notifications: &mut NotificationCollection,
) -> Result<ResolvedPlan<'a>> {
    let mut collector = Collector::new(scope);
    collector.collect(document);
    let mut units = collector.finish();
    tracing::debug!(candidates = units.len(), "collected emission units");

    link(&mut units);

    if scope.only_used_tables {
        units = keep_used_tables(units);
        link(&mut units);
    }

    let (names, handles) = lookups(&units);
    mark_referenced(&mut units, &names, &handles);

    let steps = order(&mut units, notifications)?;
    let plan = ResolvedPlan {
        units,
        steps,
        names,
        handles,
    };
    tracing::debug!(
        units = plan.units.len(),
        steps = plan.steps.len(),
        forward = plan.forward_declarations(),
        "resolved emission plan"
    );
    Ok(plan)
}

struct Collector<'s, 'a> {
    scope: &'s ScopeConfiguration,
    registry: &'static DefaultRegistry,
    /// (sort key, unit) pairs
    units: Vec<((usize, usize), EmissionUnit<'a>)>,
    ordinals: AHashMap<ConstructKind, usize>,
}

impl<'s, 'a> Collector<'s, 'a> {
    fn new(scope: &'s ScopeConfiguration) -> Self {
        Collector {
            scope,
            registry: DefaultRegistry::global(),
            units: Vec::new(),
            ordinals: AHashMap::new(),
        }
    }

    fn collect(&mut self, document: &'a CadDocument) {
        let fresh = fresh_document();

        if self.scope.includes(ConstructKind::Header) {
            let properties = self
                .registry
                .non_default(ConstructKind::Header, document.header.properties());
            if !properties.is_empty() {
                self.push(
                    Source::Header,
                    &document.header,
                    properties,
                    false,
                    None,
                );
            }
        }

        self.collect_table(&document.app_ids, &fresh.app_ids);
        self.collect_table(&document.line_types, &fresh.line_types);
        self.collect_table(&document.text_styles, &fresh.text_styles);
        self.collect_table(&document.layers, &fresh.layers);
        self.collect_table(&document.dim_styles, &fresh.dim_styles);
        self.collect_table(&document.ucss, &fresh.ucss);
        self.collect_table(&document.vports, &fresh.vports);
        self.collect_table(&document.block_records, &fresh.block_records);

        // First appearance of each entity kind, for grouping
        let mut first_seen: AHashMap<ConstructKind, usize> = AHashMap::new();
        for entity in document.entities() {
            let kind = entity.kind();
            let ordinal = self.next_ordinal(kind);
            if !self.scope.includes(kind) {
                continue;
            }
            let next = first_seen.len();
            let group = *first_seen.entry(kind).or_insert(next);
            let properties = self.registry.non_default(kind, entity.properties());
            let label = format!("{} #{}", kind.label(), ordinal);
            let mut unit = self.unit(Source::Entity(entity), entity, properties, false);
            unit.label = label;
            unit.handle = Some(entity.handle());
            let sub = if self.scope.group_by_type { group } else { 0 };
            self.units.push(((kind.rank(), sub), unit));
        }

        for object in document.objects() {
            let kind = object.kind();
            let ordinal = self.next_ordinal(kind);
            if !self.scope.includes(kind) {
                continue;
            }
            let properties = self.registry.non_default(kind, object.properties());
            let mut unit = self.unit(Source::Object(object), object, properties, false);
            if unit.name.is_none() {
                unit.label = format!("{} #{}", kind.label(), ordinal);
            }
            unit.handle = Some(object.handle());
            self.units.push(((kind.rank(), 0), unit));
        }
    }

    fn collect_table<T>(&mut self, table: &'a Table<T>, fresh: &Table<T>)
    where
        T: Construct + TableEntry + PartialEq + 'a,
    {
        for entry in table.iter() {
            let kind = entry.kind();
            if !self.scope.includes(kind) {
                continue;
            }
            let name = TableEntry::name(entry);
            let standard = match fresh.get(name) {
                Some(original) if original == entry => {
                    tracing::trace!(name, "skipping unmodified standard entry");
                    continue;
                }
                Some(_) => true,
                None => false,
            };
            let properties = self.registry.non_default(kind, entry.properties());
            let unit = self.unit(Source::Table(entry), entry, properties, standard);
            self.units.push(((kind.rank(), 0), unit));
        }
    }

    fn push(
        &mut self,
        source: Source<'a>,
        construct: &'a dyn Construct,
        properties: Vec<Property>,
        standard: bool,
        handle: Option<Handle>,
    ) {
        let kind = construct.kind();
        let mut unit = self.unit(source, construct, properties, standard);
        unit.handle = handle;
        self.units.push(((kind.rank(), 0), unit));
    }

    fn unit(
        &self,
        source: Source<'a>,
        construct: &'a dyn Construct,
        properties: Vec<Property>,
        standard: bool,
    ) -> EmissionUnit<'a> {
        let kind = construct.kind();
        let name = construct.name().map(str::to_string);
        let label = match &name {
            Some(name) => format!("{} \"{}\"", kind.label(), name),
            None => kind.label().to_string(),
        };
        let children = construct
            .children()
            .iter()
            .filter(|child| self.scope.includes(child.kind()))
            .map(|child| ChildUnit {
                kind: child.kind(),
                entity: child,
                constructor: child.constructor(),
                properties: self.registry.non_default(child.kind(), child.properties()),
            })
            .collect();
        tracing::trace!(unit = %label, changed = properties.len(), "emission unit");
        EmissionUnit {
            kind,
            label,
            name,
            source,
            constructor: construct.constructor(),
            properties,
            children,
            dependencies: Vec::new(),
            standard,
            handle: None,
            referenced_by_name: false,
            referenced_by_handle: false,
            forward_declared: false,
        }
    }

    fn next_ordinal(&mut self, kind: ConstructKind) -> usize {
        let counter = self.ordinals.entry(kind).or_insert(0);
        *counter += 1;
        *counter
    }

    fn finish(mut self) -> Vec<EmissionUnit<'a>> {
        // Stable: document order survives inside each key
        self.units.sort_by_key(|(key, _)| *key);
        self.units.into_iter().map(|(_, unit)| unit).collect()
    }
}

type Lookups = (
    AHashMap<(TableRef, String), usize>,
    AHashMap<Handle, usize>,
);

fn lookups(units: &[EmissionUnit<'_>]) -> Lookups {
    let mut names = AHashMap::new();
    let mut handles = AHashMap::new();
    for (index, unit) in units.iter().enumerate() {
        if unit.kind.is_opaque() {
            continue;
        }
        if let (Some(table), Some(name)) = (table_ref(unit.kind), &unit.name) {
            names.entry((table, name.to_uppercase())).or_insert(index);
        }
        if let Some(handle) = unit.handle.filter(|h| !h.is_null()) {
            handles.entry(handle).or_insert(index);
        }
    }
    (names, handles)
}

/// Fill in each unit's dependencies from its references
fn link(units: &mut [EmissionUnit<'_>]) {
    let (names, handles) = lookups(units);
    for index in 0..units.len() {
        let mut deps: Vec<usize> = units[index]
            .references()
            .iter()
            .filter_map(|r| target(r, &names, &handles))
            .filter(|&dep| dep != index)
            .collect();
        deps.sort_unstable();
        deps.dedup();
        units[index].dependencies = deps;
    }
}

fn target(
    reference: &Reference,
    names: &AHashMap<(TableRef, String), usize>,
    handles: &AHashMap<Handle, usize>,
) -> Option<usize> {
    match reference {
        Reference::Name { table, name } => names.get(&(*table, name.to_uppercase())).copied(),
        Reference::Handle(handle) => handles.get(handle).copied(),
    }
}

fn mark_referenced(
    units: &mut [EmissionUnit<'_>],
    names: &AHashMap<(TableRef, String), usize>,
    handles: &AHashMap<Handle, usize>,
) {
    let mut by_name = AHashSet::new();
    let mut by_handle = AHashSet::new();
    for unit in units.iter() {
        for reference in unit.references() {
            match &reference {
                Reference::Name { .. } => by_name.extend(target(&reference, names, handles)),
                Reference::Handle(_) => by_handle.extend(target(&reference, names, handles)),
            }
        }
    }
    for index in by_name {
        units[index].referenced_by_name = true;
    }
    for index in by_handle {
        units[index].referenced_by_handle = true;
    }
}

fn graph_of(units: &[EmissionUnit<'_>]) -> (DiGraph<usize, ()>, Vec<NodeIndex>) {
    let mut graph = DiGraph::with_capacity(units.len(), 0);
    let nodes: Vec<NodeIndex> = (0..units.len()).map(|i| graph.add_node(i)).collect();
    for (index, unit) in units.iter().enumerate() {
        for &dep in &unit.dependencies {
            graph.add_edge(nodes[index], nodes[dep], ());
        }
    }
    (graph, nodes)
}

/// Drop table entries and styles nothing else reaches
fn keep_used_tables(units: Vec<EmissionUnit<'_>>) -> Vec<EmissionUnit<'_>> {
    let (graph, nodes) = graph_of(&units);
    let mut reachable = vec![false; units.len()];
    let mut dfs = Dfs::empty(&graph);
    for (index, unit) in units.iter().enumerate() {
        if unit.kind.is_usage_pruned() {
            continue;
        }
        dfs.move_to(nodes[index]);
        while let Some(node) = dfs.next(&graph) {
            reachable[graph[node]] = true;
        }
    }

    let before = units.len();
    let kept: Vec<_> = units
        .into_iter()
        .zip(reachable)
        .filter(|(unit, reached)| !unit.kind.is_usage_pruned() || *reached)
        .map(|(unit, _)| unit)
        .collect();
    tracing::debug!(dropped = before - kept.len(), "removed unused table entries");
    kept
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

struct Walk<'u, 'a, 'n> {
    units: &'u mut [EmissionUnit<'a>],
    graph: DiGraph<usize, ()>,
    nodes: Vec<NodeIndex>,
    marks: Vec<Mark>,
    stack: Vec<usize>,
    steps: Vec<PlanStep>,
    notifications: &'n mut NotificationCollection,
}

fn order(
    units: &mut [EmissionUnit<'_>],
    notifications: &mut NotificationCollection,
) -> Result<Vec<PlanStep>> {
    let (graph, nodes) = graph_of(units);
    let count = units.len();
    let mut walk = Walk {
        units,
        graph,
        nodes,
        marks: vec![Mark::Unvisited; count],
        stack: Vec::new(),
        steps: Vec::with_capacity(count),
        notifications,
    };
    for index in 0..count {
        if walk.marks[index] == Mark::Unvisited {
            walk.visit(index)?;
        }
    }
    Ok(walk.steps)
}

impl Walk<'_, '_, '_> {
    fn visit(&mut self, index: usize) -> Result<()> {
        self.marks[index] = Mark::InProgress;
        self.stack.push(index);

        let mut deps: Vec<usize> = self
            .graph
            .neighbors(self.nodes[index])
            .map(|node| self.graph[node])
            .collect();
        deps.sort_unstable();
        deps.dedup();

        for dep in deps {
            match self.marks[dep] {
                Mark::Done => {}
                Mark::Unvisited => self.visit(dep)?,
                Mark::InProgress => self.forward_declare(dep)?,
            }
        }

        let phase = if self.units[index].forward_declared {
            Phase::Populate
        } else {
            Phase::Complete
        };
        self.steps.push(PlanStep { unit: index, phase });
        self.marks[index] = Mark::Done;
        self.stack.pop();
        Ok(())
    }

    fn forward_declare(&mut self, dep: usize) -> Result<()> {
        if self.units[dep].forward_declared {
            return Ok(());
        }
        if !self.units[dep].kind.supports_forward_declaration() {
            let start = self.stack.iter().position(|&u| u == dep).unwrap_or(0);
            let mut cycle: Vec<String> = self.stack[start..]
                .iter()
                .map(|&u| self.units[u].label.clone())
                .collect();
            cycle.push(self.units[dep].label.clone());
            return Err(CadError::UnresolvedCycle { units: cycle });
        }

        let unit = &mut self.units[dep];
        unit.forward_declared = true;
        tracing::warn!(unit = %unit.label, "breaking reference cycle with a forward declaration");
        self.notifications.notify(
            NotificationType::ForwardDeclared,
            format!("{} was declared before its contents to break a reference cycle", unit.label),
        );
        self.steps.push(PlanStep {
            unit: dep,
            phase: Phase::Declare,
        });
        Ok(())
    }
}
