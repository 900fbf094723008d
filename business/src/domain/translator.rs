use crate::domain::product::error_code::ErrorCode;

/// Turns a validation error code into a message for display.
///
/// Validation itself only emits codes; whoever presents them to a person
/// holds a translator for the active locale.
pub trait Translator: Send + Sync {
    fn translate(&self, code: ErrorCode) -> String;
}
