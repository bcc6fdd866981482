//! # acadgen
//!
//! Turns an in-memory CAD document into a Rust program that rebuilds it.
//!
//! The crate ships the document model (tables, entities, objects, header
//! variables) together with a generator that walks a [`CadDocument`] and
//! writes source code calling this same API. Compiling and running the
//! generated program yields a structurally equivalent document.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use acadgen::{generate, CadDocument, GenerationContext, ScopeConfiguration};
//! use acadgen::tables::Layer;
//!
//! let mut doc = CadDocument::new();
//! doc.layers.add(Layer::new("Walls"))?;
//!
//! let generated = generate(&doc, &ScopeConfiguration::default(), &GenerationContext::default())?;
//! println!("{}", generated.program.text());
//! # Ok::<(), acadgen::CadError>(())
//! ```
//!
//! ## Architecture
//!
//! - `Construct` - Describes a model type as a constructor call plus properties
//! - `ConstructKind` - Closed set of everything the generator knows how to emit
//! - Default registry - Baseline values used to elide unchanged properties
//! - Resolver - Dependency graph and deterministic emission order
//! - Emitter - Assembles the final program text
//!
//! Loading drawings from disk and compiling the generated text are left to
//! callers; the latter is modelled by the [`BuildService`] trait.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codegen;
pub mod document;
pub mod entities;
pub mod error;
pub mod notification;
pub mod objects;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use document::{CadDocument, HeaderVariables};
pub use error::{CadError, Result};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use types::{Color, Handle, LineWeight, Transparency, Vector2, Vector3};

// Re-export the generator surface
pub use codegen::{
    compare_documents, generate, generate_batch, generate_optional, verify_round_trip,
    BuildOutcome, BuildService, Construct, ConstructKind, EntryPoint, ExecutionOutcome,
    GeneratedProgram, GenerationContext, RoundTripReport, RoundTripStatus, ScopeConfiguration,
    SourceProgram,
};

/// Library version, written into generated headers
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generator name, written into generated headers
pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");
