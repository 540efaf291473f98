//! Deduplicating HTML renderer for annotated proof scripts.
//!
//! Turns an ordered stream of fragments (plain text and sentences carrying
//! goals, hypotheses and messages) into HTML where each sentence's output
//! can be folded and unfolded.
//!
//! # Two rendering modes
//!
//! - **Verbose**: every checkbox gets a unique identifier and every label a
//!   matching `for`, so the markup is interactive with no script at all.
//! - **Compact**: no identifiers, and structurally identical subtrees
//!   (hypotheses, conclusions, goals, output blocks) are emitted once and
//!   then referenced by `<q>` placeholders holding a hex index. A companion
//!   script (or [`resolve::resolve`]) rebuilds verbose-equivalent markup at
//!   load time, addressing the originals purely by document order.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌───────────────┐
//! │  types.rs    │──▶│  render/         │──▶│  html.rs      │
//! │ (Fragment,   │   │ (HtmlGenerator)  │   │ (Node tree)   │
//! │  Goal, ...)  │   └──────────────────┘   └───────────────┘
//! └──────────────┘      │            │              │
//!                       ▼            ▼              ▼
//!              ┌────────────┐ ┌────────────┐ ┌────────────┐
//!              │ gensym.rs  │ │ dedup.rs   │ │ resolve.rs │
//!              │ (verbose)  │ │ (compact)  │ │ (load time)│
//!              └────────────┘ └────────────┘ └────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use proofweave::{GeneratorConfig, HtmlGenerator, PlainHighlighter};
//!
//! let mut generator = HtmlGenerator::new(PlainHighlighter, &GeneratorConfig::compact());
//! let containers: Vec<_> = generator.render(groups).collect();
//! let script = generator.resolution_script();
//! ```

// Module declarations
pub mod canonical;
pub mod classes;
pub mod config;
pub mod contracts;
pub mod dedup;
pub mod gensym;
pub mod highlight;
pub mod html;
pub mod input;
pub mod page;
mod render;
pub mod resolve;
pub mod testing;
pub mod transforms;
mod types;

// Re-exports for public API
pub use canonical::Canonical;
pub use config::GeneratorConfig;
pub use dedup::{DedupCache, DedupKind, Lookup, Selector, SelectorRegistry};
pub use gensym::Gensym;
pub use highlight::{Highlighter, PlainHighlighter};
pub use html::{Element, Node};
pub use input::{load_document, parse_document, InputDocument, LoadError};
pub use render::{HtmlGenerator, RenderStats, Toggle, GENERATOR};
pub use resolve::{companion_script, erase_identifiers, resolve, ResolveReport};
pub use transforms::{StandardTransforms, Transforms};
pub use types::{Annotations, Fragment, Goal, Hypothesis, Message, Output, RichSentence};
