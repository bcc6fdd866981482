//! Statement generation and program assembly
//!
//! Each plan step becomes one block of statements. Blocks are collected
//! together with their section heading and the set of modules they use, then
//! laid out into the final program: header comment, imports, wrapper struct,
//! body, optional save call and return.

use super::describe::Construct;
use super::format::{Bindings, Formatter, Position};
use super::kind::{KindDescriptor, Registration};
use super::naming::Naming;
use super::opaque;
use super::program::{GenerationContext, SourceProgram};
use super::resolve::{ChildUnit, EmissionUnit, Phase, PlanStep, ResolvedPlan, Source};
use super::scope::ScopeConfiguration;
use super::value::{Constructor, Module, Property};
use crate::error::{CadError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use crate::{GENERATOR_NAME, VERSION};
use ahash::AHashMap;
use std::collections::BTreeSet;

const INDENT: &str = "    ";

/// Statements for one step, under a section heading
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedBlock {
    pub section: &'static str,
    pub lines: Vec<String>,
}

/// Everything the assembler needs from the statement pass
#[derive(Debug, Default)]
pub struct Body {
    pub blocks: Vec<EmittedBlock>,
    pub modules: BTreeSet<Module>,
}

/// Turn a resolved plan into statement blocks
pub fn emit_body(
    plan: &ResolvedPlan<'_>,
    scope: &ScopeConfiguration,
    notifications: &mut NotificationCollection,
) -> Result<Body> {
    let mut emitter = Emitter {
        plan,
        scope,
        naming: Naming::new(),
        bindings: Bindings::new(),
        vars: AHashMap::new(),
        modules: BTreeSet::new(),
        blocks: Vec::with_capacity(plan.steps.len()),
    };
    // Reserved for the document itself
    emitter.naming.claim("doc".to_string());

    for step in &plan.steps {
        emitter.emit_step(*step, notifications)?;
    }
    tracing::debug!(blocks = emitter.blocks.len(), "emitted statement blocks");

    Ok(Body {
        blocks: emitter.blocks,
        modules: emitter.modules,
    })
}

struct Emitter<'p, 'a> {
    plan: &'p ResolvedPlan<'a>,
    scope: &'p ScopeConfiguration,
    naming: Naming,
    bindings: Bindings,
    vars: AHashMap<usize, String>,
    modules: BTreeSet<Module>,
    blocks: Vec<EmittedBlock>,
}

impl<'p, 'a> Emitter<'p, 'a> {
    fn emit_step(&mut self, step: PlanStep, notes: &mut NotificationCollection) -> Result<()> {
        let plan = self.plan;
        let unit = &plan.units[step.unit];
        let descriptor = unit.kind.descriptor();
        let section = if unit.kind.is_entity() && self.scope.group_by_type {
            descriptor.plural
        } else {
            descriptor.section
        };

        let lines = match descriptor.registration {
            Registration::Opaque => self.opaque(unit, notes),
            Registration::Header => self.header(unit, notes)?,
            _ => match step.phase {
                Phase::Complete => self.complete(step.unit, unit, &descriptor, notes)?,
                Phase::Declare => self.declare(step.unit, unit, &descriptor, notes)?,
                Phase::Populate => self.populate(step.unit, unit, &descriptor, notes)?,
            },
        };

        self.blocks.push(EmittedBlock { section, lines });
        Ok(())
    }

    fn opaque(&mut self, unit: &EmissionUnit<'_>, notes: &mut NotificationCollection) -> Vec<String> {
        let detailed = self.scope.detailed_comments;
        let lines = match unit.source {
            Source::Object(object) => opaque::object_comment(object, &unit.label, detailed),
            Source::Entity(entity) => opaque::entity_comment(entity, &unit.label, detailed),
            _ => None,
        };
        unsupported(&unit.label, notes);
        lines.unwrap_or_else(|| vec![format!("// {} not generated", unit.label)])
    }

    fn header(
        &mut self,
        unit: &EmissionUnit<'_>,
        notes: &mut NotificationCollection,
    ) -> Result<Vec<String>> {
        let mut f = Formatter {
            plan: self.plan,
            bindings: &self.bindings,
            notifications: notes,
            modules: &mut self.modules,
            owner: &unit.label,
        };
        assignments(&mut f, "doc.header", &unit.properties)
    }

    fn complete(
        &mut self,
        index: usize,
        unit: &EmissionUnit<'_>,
        descriptor: &KindDescriptor,
        notes: &mut NotificationCollection,
    ) -> Result<Vec<String>> {
        let var = self.bind(index, unit, descriptor);
        self.modules.insert(descriptor.module);

        let mut f = Formatter {
            plan: self.plan,
            bindings: &self.bindings,
            notifications: notes,
            modules: &mut self.modules,
            owner: &unit.label,
        };
        let ctor = constructor(&mut f, &unit.constructor)?;
        let mut body = assignments(&mut f, &var, &unit.properties)?;
        let mut mutated = !body.is_empty();
        let (child_lines, pushed) = children(
            &mut f,
            &mut self.naming,
            &var,
            &unit.children,
            self.scope.detailed_comments,
        )?;
        body.extend(child_lines);
        mutated |= pushed;

        let mut lines = Vec::with_capacity(body.len() + 2);
        let binding = if mutated { "let mut" } else { "let" };
        lines.push(format!("{} {} = {};", binding, var, ctor));
        lines.extend(body);
        lines.push(self.register(index, unit, descriptor, &var, unit.standard));
        Ok(lines)
    }

    fn declare(
        &mut self,
        index: usize,
        unit: &EmissionUnit<'_>,
        descriptor: &KindDescriptor,
        notes: &mut NotificationCollection,
    ) -> Result<Vec<String>> {
        let var = self.bind(index, unit, descriptor);
        self.modules.insert(descriptor.module);

        let mut f = Formatter {
            plan: self.plan,
            bindings: &self.bindings,
            notifications: notes,
            modules: &mut self.modules,
            owner: &unit.label,
        };
        let ctor = constructor(&mut f, &unit.constructor)?;

        let mut lines = vec![format!("let mut {} = {};", var, ctor)];
        // Standard entries already exist in a new document
        if let (Registration::Table(field), false) = (descriptor.registration, unit.standard) {
            lines.push(format!("doc.{}.add({}.clone())?;", field, var));
        }
        Ok(lines)
    }

    fn populate(
        &mut self,
        index: usize,
        unit: &EmissionUnit<'_>,
        descriptor: &KindDescriptor,
        notes: &mut NotificationCollection,
    ) -> Result<Vec<String>> {
        let var = self
            .vars
            .get(&index)
            .cloned()
            .ok_or_else(|| CadError::MissingBinding {
                unit: unit.label.clone(),
            })?;

        let mut f = Formatter {
            plan: self.plan,
            bindings: &self.bindings,
            notifications: notes,
            modules: &mut self.modules,
            owner: &unit.label,
        };
        let mut lines = assignments(&mut f, &var, &unit.properties)?;
        let (child_lines, _) = children(
            &mut f,
            &mut self.naming,
            &var,
            &unit.children,
            self.scope.detailed_comments,
        )?;
        lines.extend(child_lines);
        lines.push(self.register(index, unit, descriptor, &var, true));
        Ok(lines)
    }

    fn bind(&mut self, index: usize, unit: &EmissionUnit<'_>, descriptor: &KindDescriptor) -> String {
        let var = self.naming.bind(descriptor.prefix, unit.name.as_deref());
        self.bindings.bind_value(index, var.clone());
        self.vars.insert(index, var.clone());
        var
    }

    /// The statement adding the finished value to the document
    fn register(
        &mut self,
        index: usize,
        unit: &EmissionUnit<'_>,
        descriptor: &KindDescriptor,
        var: &str,
        replace: bool,
    ) -> String {
        let value = if unit.referenced_by_name {
            format!("{}.clone()", var)
        } else {
            var.to_string()
        };
        let call = match descriptor.registration {
            Registration::Table(field) => {
                let method = if replace { "replace" } else { "add" };
                return format!("doc.{}.{}({})?;", field, method, value);
            }
            Registration::Entity(variant) => {
                self.modules.insert(Module::Entities);
                format!("doc.add_entity(EntityType::{}({}))?", variant, value)
            }
            Registration::Object(variant) => {
                self.modules.insert(Module::Objects);
                format!("doc.add_object(ObjectType::{}({}))?", variant, value)
            }
            Registration::Header | Registration::Opaque => return String::new(),
        };
        if unit.referenced_by_handle {
            let handle_var = self.naming.claim(format!("{}_handle", var));
            self.bindings.bind_handle(index, handle_var.clone());
            format!("let {} = {};", handle_var, call)
        } else {
            format!("{};", call)
        }
    }
}

fn unsupported(label: &str, notes: &mut NotificationCollection) {
    tracing::warn!(unit = %label, "construct has no programmatic form");
    notes.notify(
        NotificationType::Unsupported,
        format!("{} cannot be generated and was written as a comment", label),
    );
}

fn constructor(f: &mut Formatter<'_, '_>, ctor: &Constructor) -> Result<String> {
    let mut args = Vec::with_capacity(ctor.args.len());
    for arg in &ctor.args {
        match f.render(arg, Position::Arg)? {
            Some(text) => args.push(text),
            None => {
                f.modules.insert(Module::Types);
                args.push("Handle::NULL".to_string());
            }
        }
    }
    Ok(format!(
        "{}::{}({})",
        ctor.type_name,
        ctor.method,
        args.join(", ")
    ))
}

fn assignments(
    f: &mut Formatter<'_, '_>,
    target: &str,
    properties: &[Property],
) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(properties.len());
    for property in properties {
        if let Some(value) = f.render(&property.value, Position::Assign)? {
            lines.push(format!("{}.{} = {};", target, property.name, value));
        }
    }
    Ok(lines)
}

/// Inline statements for a block's entities; the flag reports any push
fn children(
    f: &mut Formatter<'_, '_>,
    naming: &mut Naming,
    owner: &str,
    children: &[ChildUnit<'_>],
    detailed: bool,
) -> Result<(Vec<String>, bool)> {
    let mut lines = Vec::new();
    let mut pushed = false;
    for child in children {
        let descriptor = child.kind.descriptor();
        let variant = match descriptor.registration {
            Registration::Entity(variant) => variant,
            _ => {
                let label = format!("{} in {}", child.kind.label(), f.owner);
                let comment = opaque::entity_comment(child.entity, &label, detailed)
                    .unwrap_or_else(|| vec![format!("// {} not generated", label)]);
                unsupported(&label, f.notifications);
                lines.extend(comment);
                continue;
            }
        };

        let var = naming.bind(descriptor.prefix, child.entity.name());
        f.modules.insert(Module::Entities);
        let ctor = constructor(f, &child.constructor)?;
        let body = assignments(f, &var, &child.properties)?;
        let binding = if body.is_empty() { "let" } else { "let mut" };
        lines.push(format!("{} {} = {};", binding, var, ctor));
        lines.extend(body);
        lines.push(format!(
            "{}.entities.push(EntityType::{}({}));",
            owner, variant, var
        ));
        pushed = true;
    }
    Ok((lines, pushed))
}

/// Lay the statement blocks out as a complete program
pub fn assemble(scope: &ScopeConfiguration, context: &GenerationContext, body: &Body) -> SourceProgram {
    let mut out = Layout::default();

    if scope.header_comment {
        out.line(0, format!("// Generated by {} {}", GENERATOR_NAME, VERSION));
        if let Some(source) = &context.source_name {
            out.line(0, format!("// Source: {}", source));
        }
        if let Some(at) = &context.generated_at {
            out.line(0, format!("// Generated at: {}", at));
        }
        out.blank();
    }

    // A bare body cannot live inside a module
    let namespace = scope
        .namespace
        .as_deref()
        .filter(|ns| scope.class_wrapper && !ns.is_empty());
    let outer = usize::from(namespace.is_some());
    if let Some(ns) = namespace {
        out.line(0, format!("pub mod {} {{", ns));
    }

    if scope.imports {
        for module in body.modules.iter().filter(|m| **m != Module::Root) {
            out.line(outer, format!("use {}::*;", module.path()));
        }
        if scope.class_wrapper {
            out.line(outer, "use acadgen::{CadDocument, Result};");
        } else {
            out.line(outer, "use acadgen::CadDocument;");
        }
        out.blank();
    }

    let depth = if scope.class_wrapper {
        out.line(outer, format!("pub struct {};", scope.class_name));
        out.blank();
        out.line(outer, format!("impl {} {{", scope.class_name));
        let returns = if scope.return_statement {
            "Result<CadDocument>"
        } else {
            "Result<()>"
        };
        out.line(outer + 1, format!("pub fn create_document() -> {} {{", returns));
        outer + 2
    } else {
        0
    };

    out.line(depth, "let mut doc = CadDocument::new();");
    let mut section = None;
    for block in &body.blocks {
        out.blank();
        if section != Some(block.section) {
            out.line(depth, format!("// {}", block.section));
            section = Some(block.section);
        }
        for line in &block.lines {
            out.line(depth, line.as_str());
        }
    }

    if scope.save_comment {
        let target = context.source_name.as_deref().unwrap_or("output.dxf");
        out.blank();
        out.line(depth, "// Save the document");
        out.line(
            depth,
            format!("// writer.write_to_file(&doc, {:?})?;", target),
        );
    }

    if scope.class_wrapper {
        out.blank();
        out.line(depth, if scope.return_statement { "Ok(doc)" } else { "Ok(())" });
        out.line(outer + 1, "}");
        out.line(outer, "}");
    } else if scope.return_statement {
        out.blank();
        out.line(depth, "Ok(doc)");
    }

    if namespace.is_some() {
        out.line(0, "}");
    }

    SourceProgram::new(out.finish())
}

#[derive(Default)]
struct Layout {
    lines: Vec<String>,
}

impl Layout {
    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", INDENT.repeat(depth), text.as_ref()));
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::resolve::resolve;
    use crate::entities::{Circle, EntityType, Solid3D};
    use crate::objects::{Group, ObjectType};
    use crate::tables::{BlockRecord, Layer};
    use crate::types::{Color, Vector3};
    use crate::CadDocument;

    fn body_of(doc: &CadDocument, scope: &ScopeConfiguration) -> (Body, NotificationCollection) {
        let mut notes = NotificationCollection::new();
        let plan = resolve(doc, scope, &mut notes).unwrap();
        let body = emit_body(&plan, scope, &mut notes).unwrap();
        (body, notes)
    }

    #[test]
    fn test_unreferenced_layer_is_not_cloned() {
        let mut doc = CadDocument::new();
        doc.layers.add(Layer::with_color("Walls", Color::RED)).unwrap();
        let (body, _) = body_of(&doc, &ScopeConfiguration::default());
        assert_eq!(
            body.blocks[0].lines,
            vec![
                "let mut layer_walls = Layer::new(\"Walls\");",
                "layer_walls.color = Color::RED;",
                "doc.layers.add(layer_walls)?;",
            ]
        );
    }

    #[test]
    fn test_handle_reference_binds_registration_result() {
        let mut doc = CadDocument::new();
        let circle = doc
            .add_entity(EntityType::Circle(Circle::new(Vector3::ZERO, 2.0)))
            .unwrap();
        let mut group = Group::new("G");
        group.add_entity(circle);
        doc.add_object(ObjectType::Group(group)).unwrap();

        let (body, _) = body_of(&doc, &ScopeConfiguration::default());
        assert_eq!(
            body.blocks[0].lines.last().unwrap(),
            "let circle_1_handle = doc.add_entity(EntityType::Circle(circle_1))?;"
        );
        assert!(body.blocks[1]
            .lines
            .contains(&"group_g.entities = vec![circle_1_handle];".to_string()));
    }

    #[test]
    fn test_block_children_are_pushed_inline() {
        let mut doc = CadDocument::new();
        let mut block = BlockRecord::new("Bolt");
        block
            .entities
            .push(EntityType::Circle(Circle::new(Vector3::ZERO, 0.5)));
        block
            .entities
            .push(EntityType::Solid3D(Solid3D::new("body")));
        doc.block_records.add(block).unwrap();

        let scope = ScopeConfiguration::default().with_detailed_comments(false);
        let (body, notes) = body_of(&doc, &scope);
        let lines = &body.blocks[0].lines;
        assert_eq!(lines[0], "let mut block_bolt = BlockRecord::new(\"Bolt\");");
        assert!(lines.contains(&"block_bolt.entities.push(EntityType::Circle(circle_1));".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("// Solid3D in Block \"Bolt\"")));
        assert!(notes.has_type(NotificationType::Unsupported));
    }

    #[test]
    fn test_bare_assembly() {
        let scope = ScopeConfiguration::default()
            .with_class_wrapper(false)
            .with_header_comment(false)
            .with_namespace("ignored");
        let program = assemble(&scope, &GenerationContext::default(), &Body::default());
        assert_eq!(
            program.text(),
            "use acadgen::CadDocument;\n\nlet mut doc = CadDocument::new();\n\nOk(doc)\n"
        );
    }

    #[test]
    fn test_namespace_wraps_imports_and_struct() {
        let scope = ScopeConfiguration::default()
            .with_header_comment(false)
            .with_return_statement(false)
            .with_namespace("drawings");
        let program = assemble(&scope, &GenerationContext::default(), &Body::default());
        let expected = "\
pub mod drawings {
    use acadgen::{CadDocument, Result};

    pub struct DrawingFactory;

    impl DrawingFactory {
        pub fn create_document() -> Result<()> {
            let mut doc = CadDocument::new();

            Ok(())
        }
    }
}
";
        assert_eq!(program.text(), expected);
    }
}
