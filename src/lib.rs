//! *stitch-html* is an HTML template preprocessor. It scans a template for
//! substitution markers (`#[name]` by default), splices in the named
//! component fragments recursively and re-renders the result as canonically
//! indented markup.
//!
//! The parsing stages are deliberately permissive and never fail: bogus
//! markup produces a differently shaped tree instead of an error. The only
//! failures an expansion reports are a missing template or component, a
//! malformed marker and the runaway recursion guard tripping.
//!
//! # Example
//!
//! ```
//! use stitch_html::{MemoryStore, Preprocessor};
//!
//! let mut templates = MemoryStore::new();
//! let mut components = MemoryStore::new();
//!
//! templates.insert("index.html", "<div>#[greeting]</div>");
//! components.insert("greeting", "<b>Hi</b>");
//!
//! let preprocessor = Preprocessor::new(templates, components);
//!
//! assert_eq!(
//!     preprocessor.process("index.html").unwrap(),
//!     "<div>\n    <b>\n        Hi\n    </b>\n</div>\n"
//! );
//! ```

#[macro_use]
mod debug_trace;

mod errors;
mod store;

pub mod html;
pub mod markers;
pub mod parser;
pub mod rewriter;
pub mod tree;

pub use self::errors::ExpansionError;
pub use self::html::{VoidElementSet, DEFAULT_VOID_ELEMENTS};
pub use self::rewriter::{expand_str, Preprocessor, Settings};
pub use self::store::{FragmentStore, MemoryStore};
