//! Render [HTK](https://htk.eng.cam.ac.uk/) grammar networks with graphviz.
//!
//! ```no_run
//! use htkviz_core::{Format, Grammar, Renderer};
//!
//! let grammar = Grammar::load("yesno.slf")?;
//! let graph = grammar.graph(false);
//! // writes `yesno.slfmulti.svg`
//! Renderer::default().render(&graph, Format::Svg, "yesno.slf")?;
//! # Ok::<_, htkviz_core::Error>(())
//! ```
//!
//! The input is matched token by token rather than parsed line by line:
//! - `VERSION=<d>.<d>` and `N=<nodes> L=<arcs>` are required.
//! - Every `I=<id> W=<word>` is a state.
//! - Every `J=<index> S=<start> E=<end>` is an arc.
mod dot;
mod error;
mod grammar;
mod graph;
mod render;

pub use error::{Error, Result};
pub use grammar::{Arc, Grammar, Metadata, NULL};
pub use graph::GrammarGraph;
pub use render::{output_path, Format, Renderer};
