//! Signature formatting.
//!
//! Turns a raw type signature reported by the type oracle into the lines
//! shown under "Did you mean:". A brace-delimited call-signature union
//! (`{ <A>(a: A): A; <A, B>(a: A, b: B): B; }`) renders one line per
//! overload; anything else renders a single line bound to the name.

/// Nesting depth of the four bracket kinds during a left-to-right scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthState {
    pub paren: u32,
    pub bracket: u32,
    pub brace: u32,
    pub angle: u32,
}

impl DepthState {
    pub fn is_top_level(&self) -> bool {
        self.paren == 0 && self.bracket == 0 && self.brace == 0 && self.angle == 0
    }

    /// Account for `ch`, which follows `prev` in the input.
    ///
    /// Closers never drive a counter below zero. A `>` directly after `=` is
    /// the tail of an arrow and leaves the angle depth alone.
    pub fn advance(&mut self, ch: char, prev: Option<char>) {
        match ch {
            '(' => self.paren += 1,
            ')' => self.paren = self.paren.saturating_sub(1),
            '[' => self.bracket += 1,
            ']' => self.bracket = self.bracket.saturating_sub(1),
            '{' => self.brace += 1,
            '}' => self.brace = self.brace.saturating_sub(1),
            '<' => self.angle += 1,
            '>' if !is_arrow_tail(prev) => self.angle = self.angle.saturating_sub(1),
            _ => {}
        }
    }
}

#[inline]
fn is_arrow_tail(prev: Option<char>) -> bool {
    prev == Some('=')
}

/// Split `input` on `;` characters that sit outside every bracket pair.
///
/// Segments are returned untrimmed; whitespace-only segments are dropped.
pub fn split_top_level_segments(input: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut depth = DepthState::default();
    let mut prev = None;

    for ch in input.chars() {
        if ch == ';' && depth.is_top_level() {
            if !current.trim().is_empty() {
                segments.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        } else {
            current.push(ch);
            depth.advance(ch, prev);
        }
        prev = Some(ch);
    }

    if !current.trim().is_empty() {
        segments.push(current);
    }
    segments
}

/// Return the leading generic-parameter clause of `value`, brackets
/// included, or `None` when `value` does not start with a closed `<...>`.
///
/// ```
/// use suggest_format::extract_angle_segment;
///
/// assert_eq!(extract_angle_segment("<A, B = never>(a: A): B"), Some("<A, B = never>"));
/// assert_eq!(extract_angle_segment("<F extends () => void>(f: F): F"), Some("<F extends () => void>"));
/// assert_eq!(extract_angle_segment("(a: A): A"), None);
/// ```
pub fn extract_angle_segment(value: &str) -> Option<&str> {
    if !value.starts_with('<') {
        return None;
    }

    let mut depth: u32 = 0;
    let mut prev = None;
    for (index, ch) in value.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' if !is_arrow_tail(prev) && depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return Some(&value[..index + ch.len_utf8()]);
                }
            }
            _ => {}
        }
        prev = Some(ch);
    }
    None
}

/// Render one signature as a single line bound to `name`.
///
/// - `(args) => ret` becomes `name(args): ret`
/// - text already starting with `name(` or `name<` passes through
/// - text starting with `<` or `(` gets the name prefixed
/// - anything else becomes `name: text`
pub fn format_single_signature(name: &str, signature: &str) -> String {
    let trimmed = signature.trim();

    if let Some((args, ret)) = split_arrow(trimmed) {
        return format!("{name}({args}): {ret}");
    }

    let after_name = trimmed.strip_prefix(name);
    if after_name.is_some_and(|rest| rest.starts_with('(') || rest.starts_with('<')) {
        return trimmed.to_string();
    }

    if trimmed.starts_with('<') || trimmed.starts_with('(') {
        return format!("{name}{trimmed}");
    }

    format!("{name}: {trimmed}")
}

/// Split `(args) => ret` at the arrow that follows the leading parameter
/// list. Arrows nested inside the parameters are left alone.
fn split_arrow(trimmed: &str) -> Option<(&str, &str)> {
    const ARROW: &str = " => ";
    if !trimmed.starts_with('(') {
        return None;
    }
    let close = leading_group_end(trimmed)?;
    let ret = trimmed[close + 1..].strip_prefix(ARROW)?;
    Some((&trimmed[1..close], ret))
}

/// Byte index of the `)` closing the parenthesized group `value` opens with.
fn leading_group_end(value: &str) -> Option<usize> {
    let mut depth = DepthState::default();
    let mut prev = None;
    for (index, ch) in value.char_indices() {
        depth.advance(ch, prev);
        if ch == ')' && depth.is_top_level() {
            return Some(index);
        }
        prev = Some(ch);
    }
    None
}

/// Label for one overload of a call-signature union.
///
/// Generic overloads render as `name<generics>`. A bare call signature
/// `(args): ret` keeps its parameter list as `name(args): ret`, a segment
/// already naming itself passes through, and anything else is just `name`.
pub fn format_overload_label(name: &str, segment: &str) -> String {
    let trimmed = segment.trim();
    let without_name = trimmed
        .strip_prefix(name)
        .map_or(trimmed, str::trim_start);

    if let Some(generics) = extract_angle_segment(without_name) {
        return format!("{name}{generics}");
    }
    if trimmed.starts_with('(') {
        return format_single_signature(name, trimmed);
    }
    if !name.is_empty() && without_name.starts_with('(') {
        return trimmed.to_string();
    }
    name.to_string()
}

/// Render `signature` as one or more display lines for `name`.
///
/// ```
/// use suggest_format::format_signature_lines;
///
/// let lines = format_signature_lines(
///     "pipe",
///     "{ <A>(a: A): A; <A, B = never>(a: A, ab: (a: A) => B): B; }",
/// );
/// assert_eq!(lines, vec!["pipe<A>", "pipe<A, B = never>"]);
/// ```
pub fn format_signature_lines(name: &str, signature: &str) -> Vec<String> {
    let trimmed = signature.trim();

    if let Some(inner) = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        let segments = split_top_level_segments(inner.trim());
        let overloads: Vec<&str> = segments
            .iter()
            .map(|segment| segment.trim())
            .filter(|segment| !segment.is_empty())
            .collect();

        if overloads.len() > 1 {
            return overloads
                .into_iter()
                .map(|segment| format_overload_label(name, segment))
                .collect();
        }
    }

    vec![format_single_signature(name, signature)]
}

#[cfg(test)]
#[path = "../tests/signature.rs"]
mod tests;
