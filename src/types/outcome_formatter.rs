//! Textual rendering of outcomes.

use core::fmt::{self, Display, Write};

use crate::types::alloc_type::{Cow, String};

/// Trait for customizing how an outcome is rendered.
///
/// Every method has a default, so an implementor only overrides the pieces
/// it cares about. The defaults produce `Result(<payload>)`.
pub trait OutcomeFormatter {
    fn label(&self) -> &str {
        "Result"
    }

    fn variant_tag(&self, _is_success: bool) -> Option<&str> {
        None
    }

    /// Appends `payload` to `out`.
    ///
    /// Fails only when the payload's own `Display` impl fails.
    fn format_payload(&self, out: &mut String, payload: &dyn Display) -> fmt::Result {
        write!(out, "{}", payload)
    }

    /// Renders a payload, surfacing a failing `Display` impl as `fmt::Error`.
    fn try_format(&self, is_success: bool, payload: &dyn Display) -> Result<String, fmt::Error> {
        let label = self.label();
        let tag = self.variant_tag(is_success);
        let mut out = String::with_capacity(label.len() + 16);

        if label.is_empty() && tag.is_none() {
            self.format_payload(&mut out, payload)?;
            return Ok(out);
        }

        out.push_str(label);
        if let Some(tag) = tag {
            if !label.is_empty() {
                out.push('.');
            }
            out.push_str(tag);
        }
        out.push('(');
        self.format_payload(&mut out, payload)?;
        out.push(')');
        Ok(out)
    }

    /// Renders a payload; an empty string when its `Display` impl fails.
    fn format(&self, is_success: bool, payload: &dyn Display) -> String {
        self.try_format(is_success, payload).unwrap_or_default()
    }
}

/// Configuration-based outcome renderer.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeFormatConfig};
///
/// let ok: Outcome<u8, &str> = Outcome::success(7);
/// assert_eq!(ok.render_with(&OutcomeFormatConfig::default()), "Result(7)");
/// assert_eq!(ok.render_with(&OutcomeFormatConfig::tagged()), "Result.success(7)");
/// assert_eq!(ok.render_with(&OutcomeFormatConfig::bare()), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeFormatConfig {
    pub label: Cow<'static, str>,
    pub show_variant: bool,
    pub success_tag: Cow<'static, str>,
    pub failure_tag: Cow<'static, str>,
}

impl Default for OutcomeFormatConfig {
    fn default() -> Self {
        Self {
            label: Cow::Borrowed("Result"),
            show_variant: false,
            success_tag: Cow::Borrowed("success"),
            failure_tag: Cow::Borrowed("failure"),
        }
    }
}

impl OutcomeFormatConfig {
    /// Prefixes the payload with the variant name, e.g. `Result.failure(timeout)`.
    #[inline]
    pub fn tagged() -> Self {
        Self { show_variant: true, ..Default::default() }
    }

    /// Renders the payload alone.
    #[inline]
    pub fn bare() -> Self {
        Self { label: Cow::Borrowed(""), ..Default::default() }
    }

    /// Replaces the `Result` label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

impl OutcomeFormatter for OutcomeFormatConfig {
    fn label(&self) -> &str {
        &self.label
    }

    fn variant_tag(&self, is_success: bool) -> Option<&str> {
        if !self.show_variant {
            return None;
        }
        Some(if is_success { &self.success_tag } else { &self.failure_tag })
    }
}
