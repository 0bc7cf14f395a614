//! msgtpl: positional-placeholder template rendering with strict key validation.
//!
//! Templates contain numbered placeholders (`{0}`, `{1}`, ...) that are filled
//! from an attribute bag keyed by string. Before any substitution happens, the
//! attribute keys are normalized to canonical integer indices and validated:
//! the key set must form a contiguous, duplicate-free range starting at 0, or
//! rendering fails with a specific [`ValidationError`] instead of silently
//! producing wrong output.
//!
//! Several surface forms of the same logical index are accepted (`"0"`,
//! `"00"`, and `"000"` all mean index 0), but only one of them may be present
//! in a single bag.
//!
//! # Behavior
//!
//! - An empty attribute bag short-circuits: the template is returned verbatim,
//!   placeholders and all. No attributes means formatting was not requested.
//! - Otherwise every key must be a pure unsigned decimal digit string, the
//!   normalized indices must be unique, and they must cover `0..N` with no
//!   gaps. Any violation aborts the render with no partial output.
//! - The validated values are handed to a positional formatter that replaces
//!   `{i}` with the value at index `i` and leaves anything else (out-of-range
//!   indices, non-numeric tokens, unterminated braces) verbatim.
//!
//! # Example
//!
//! ```
//! use msgtpl::{render, RenderContext};
//!
//! let ctx = RenderContext::new()
//!     .define("02", "!")
//!     .define("000", "hello")
//!     .define("01", "world");
//!
//! assert_eq!(render("{0} {1}{2}", &ctx)?, "hello world!");
//! # Ok::<(), msgtpl::ValidationError>(())
//! ```

pub mod context;
pub mod error;
pub mod format;
pub mod normalize;
pub mod render;

pub use context::RenderContext;
pub use error::{Result, ValidationError};
pub use format::format_positional;
pub use normalize::ordered_values;
pub use render::{MessageFormatTemplateEngine, TemplateEngine, render};
