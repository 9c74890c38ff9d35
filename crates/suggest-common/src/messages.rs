//! Message templates for suggestion diagnostics.
//!
//! Templates carry `{0}`, `{1}` placeholders. Use [`format_message`] to fill
//! them in.

pub const PROPERTY_DOES_NOT_EXIST: &str = "Property '{0}' does not exist.";
pub const PROPERTY_DOES_NOT_EXIST_ON_TYPE: &str = "Property '{0}' does not exist on type '{1}'.";
pub const EXPORT_DOES_NOT_EXIST_ON_TYPE: &str = "Export '{0}' does not exist on type '{1}'.";
pub const EXPORT_DOES_NOT_EXIST_IN_MODULE: &str = "Export '{0}' does not exist in module '{1}'.";
pub const CANNOT_FIND_NAME: &str = "Cannot find name '{0}'.";
pub const CANNOT_FIND_LOCAL_MODULE: &str = "Cannot find module \"{0}\".";
pub const CANNOT_FIND_MODULE_OR_TYPE_DECLARATIONS: &str =
    "Cannot find module '{0}' or its corresponding type declarations.";
pub const DID_YOU_MEAN: &str = "Did you mean:";
pub const NO_SIMILAR_SUGGESTIONS: &str = "No similar suggestions found.";

/// Prefix of every rendered suggestion line.
pub const SUGGESTION_LINE_PREFIX: &str = "  - ";

/// Format a message by replacing `{0}`, `{1}`, etc. with arguments.
///
/// Substitution is a single pass, so placeholders that appear inside an
/// argument are left alone.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            Some((index, close))
        });
        match placeholder {
            Some((index, close)) if index < args.len() => {
                result.push_str(args[index]);
                rest = &after[close + 1..];
            }
            _ => {
                result.push('{');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
#[path = "../tests/messages.rs"]
mod tests;
