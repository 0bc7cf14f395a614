//! Template rendering pipeline.
//!
//! The renderer is a single linear pipeline per call: read the attribute bag
//! from the context, short-circuit if it is empty, otherwise validate and
//! order the values and hand them to the positional formatter. No state is
//! retained between calls.

use crate::context::RenderContext;
use crate::error::Result;
use crate::format::format_positional;
use crate::normalize::ordered_values;

/// A strategy for turning a template plus a context into output text.
pub trait TemplateEngine {
    /// Render `template` using the attributes exposed by `ctx`.
    fn render(&self, template: &str, ctx: &RenderContext) -> Result<String>;
}

/// Template engine for positional `{0}`-style placeholders.
///
/// An empty attribute bag returns the template byte-for-byte unchanged, even
/// if it contains placeholder syntax: no attributes means formatting was not
/// requested. A non-empty bag is always validated in full, whether or not the
/// template references every index.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFormatTemplateEngine;

impl TemplateEngine for MessageFormatTemplateEngine {
    fn render(&self, template: &str, ctx: &RenderContext) -> Result<String> {
        let attributes = ctx.attributes();
        if attributes.is_empty() {
            return Ok(template.to_string());
        }

        let values = ordered_values(attributes)?;
        Ok(format_positional(template, &values))
    }
}

/// Render a template with [`MessageFormatTemplateEngine`].
///
/// # Examples
///
/// ```
/// use msgtpl::{render, RenderContext};
///
/// let ctx = RenderContext::new().define("0", "hello").define("1", "world");
/// assert_eq!(render("{0} {1}", &ctx)?, "hello world");
/// # Ok::<(), msgtpl::ValidationError>(())
/// ```
pub fn render(template: &str, ctx: &RenderContext) -> Result<String> {
    MessageFormatTemplateEngine.render(template, ctx)
}
