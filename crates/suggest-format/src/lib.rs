//! Did-you-mean message rendering.
//!
//! - [`format_signature_lines`] turns a raw type signature (possibly a union
//!   of call-signature overloads) into display lines bound to a name.
//! - [`compose_message`] assembles the final diagnostic text for a
//!   [`MessageContext`] and a ranked [`SuggestionSet`](suggest_ranking::SuggestionSet).

mod message;
mod signature;

pub use message::{
    MessageContext, ModuleKind, compose_message, format_export_message, format_import_message,
    format_member_message, format_missing_name_message, format_module_message,
    format_suggestion_list, format_suggestion_message,
};
pub use signature::{
    DepthState, extract_angle_segment, format_overload_label, format_signature_lines,
    format_single_signature, split_top_level_segments,
};
