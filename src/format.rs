//! Positional placeholder substitution.
//!
//! This is the downstream formatter the renderer hands its ordered value
//! sequence to. It replaces `{i}` tokens with the value at index `i` and is
//! deliberately lenient about everything else: the validation story lives
//! entirely in the key normalizer, not here.
//!
//! # Syntax
//!
//! - `{0}`, `{1}`, ... - substitutes the value at that index
//! - a token that is not a pure digit string (`{name}`, `{}`, `{1x}`) is
//!   emitted verbatim, braces included
//! - an index with no corresponding value (`{9}` with three values) is
//!   emitted verbatim
//! - an unterminated `{` runs to the end of the pattern and is emitted
//!   verbatim; a lone `}` is an ordinary character

use serde_json::Value;

/// Render a value for substitution into a pattern.
///
/// Strings render bare, without JSON quoting; everything else uses its JSON
/// text form (`null`, numbers, booleans, arrays, objects).
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Substitute positional placeholders in `pattern` from `args`.
///
/// # Examples
///
/// ```
/// use msgtpl::format_positional;
/// use serde_json::json;
///
/// let args = [json!("hello"), json!("world")];
/// let args: Vec<_> = args.iter().collect();
/// assert_eq!(format_positional("{0} {1}", &args), "hello world");
/// assert_eq!(format_positional("{0} {9}", &args), "hello {9}");
/// ```
pub fn format_positional(pattern: &str, args: &[&Value]) -> String {
    let mut result = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        // Collect the token up to the matching '}'.
        let mut token = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }

        let index = if closed && !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
        {
            token.parse::<usize>().ok()
        } else {
            None
        };

        match index.and_then(|i| args.get(i)) {
            Some(value) => result.push_str(&value_text(value)),
            None => {
                result.push('{');
                result.push_str(&token);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}
