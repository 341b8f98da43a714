//! # Class-Name Joining
//!
//! Every field component builds its `class` attribute the same way: an
//! ordered list of tokens where some entries are only present under a
//! condition. Absent and empty tokens are dropped and the survivors are
//! joined with single spaces. The joining itself is `tailwind_fuse`'s
//! [`tw_join!`]; this module is the one place the components call it from.
//!
//! ## Functions
//!
//! - [`join_classes`] - Join an arbitrary sequence of optional tokens
//! - [`control_class`] - Class string for a native control (base, error, extra)
//! - [`label_class`] - Class string for a field label (base, required)

use tailwind_fuse::{tw_join, AsTailwindClass};

use crate::utils::constants::{LABEL_CLASS, LABEL_REQUIRED_CLASS};

/// Join class tokens with single spaces, skipping absent and blank ones
///
/// Each token is trimmed first, so whitespace-only tokens are skipped too.
/// Order is preserved. Joining an already joined string yields it unchanged.
///
/// # Arguments
///
/// * `tokens` - Tokens in output order; `None`, `""` and whitespace-only tokens are skipped
///
/// # Examples
///
/// ```rust
/// use form_fields::utils::classes::join_classes;
///
/// let error = true;
/// assert_eq!(
///     join_classes([Some("field-input"), error.then_some("field-input-error"), None]),
///     "field-input field-input-error"
/// );
/// assert_eq!(join_classes([None::<&str>, Some("")]), "");
/// ```
pub fn join_classes<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsTailwindClass,
{
    tokens
        .into_iter()
        .fold(String::new(), |joined, token| tw_join!(joined, token))
}

/// Class string for a native control
///
/// `base` always comes first, `error_class` follows only when `error` is set,
/// and the caller's `extra` token (if any) goes last.
///
/// # Examples
///
/// ```rust
/// use form_fields::utils::classes::control_class;
///
/// assert_eq!(
///     control_class("field-input", "field-input-error", true, Some("wide")),
///     "field-input field-input-error wide"
/// );
/// assert_eq!(control_class("field-select", "field-select-error", false, None), "field-select");
/// ```
pub fn control_class(base: &str, error_class: &str, error: bool, extra: Option<&str>) -> String {
    tw_join!(base, error.then_some(error_class), extra)
}

/// Class string for a field label
pub fn label_class(required: bool) -> String {
    tw_join!(LABEL_CLASS, required.then_some(LABEL_REQUIRED_CLASS))
}
