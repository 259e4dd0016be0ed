//! # Assetgraph - Graph Model Translation and Validation Engine
//!
//! **Assetgraph** is the model layer behind a visual editor for node-based
//! financial data pipelines. Users compose a directed graph of typed
//! processing steps (data loaders, indicator transforms, report generators)
//! on a canvas; this crate owns the bidirectional mapping between that UI
//! graph and the canonical backend graph specification, and every structural
//! and semantic check performed before a graph is imported or submitted for
//! execution.
//!
//! ## Core Workflow
//!
//! 1.  **Edit**: an [`EditorSession`](session::EditorSession) owns the
//!     mutable UI graph (nodes, edges, canvas positions) for one editor.
//! 2.  **Export / Execute**: [`GraphTransformer`](transform::GraphTransformer)
//!     derives the canonical [`GraphSpec`](graph::GraphSpec), merging schema
//!     defaults from the [`NodeTypeRegistry`](schema::NodeTypeRegistry); the
//!     [`validator`] refuses invalid graphs before submission.
//! 3.  **Import**: external JSON documents are validated, converted back to
//!     UI form, and placed on the canvas via saved positions or the
//!     deterministic grid layout in [`layout`].
//!
//! ## Quick Start
//!
//! ```rust
//! use assetgraph::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A session backed by the built-in financial node catalog.
//!     let mut session = EditorSession::with_builtin_catalog();
//!
//!     let loader = session.add_node("LoadTickerData", Position::new(0.0, 0.0));
//!     let rsi = session.add_node("CalculateRSI", Position::new(250.0, 0.0));
//!     session.connect(&loader, &rsi)?;
//!
//!     // The RSI node picked up its schema defaults.
//!     let spec = session.export_spec();
//!     assert_eq!(spec.nodes[1].params["period"], 14);
//!
//!     // Pre-flight validation accumulates every problem in one pass.
//!     let report = session.validate();
//!     for warning in &report.warnings {
//!         eprintln!("warning: {}", warning);
//!     }
//!
//!     // Canonical JSON for preview, clipboard export, or execution.
//!     let json = session.export_json()?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;
pub mod graph;
pub mod layout;
pub mod prelude;
pub mod schema;
pub mod session;
pub mod transform;
pub mod validator;
