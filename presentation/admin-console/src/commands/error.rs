use serde::Serialize;

use business::domain::product::input::ProductInput;
use business::domain::translator::Translator;

#[derive(Debug, Serialize)]
pub struct FieldErrorResponse {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorResponse>,
    /// Submitted product, echoed back so it can be corrected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<ProductInput>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            errors: Vec::new(),
            input: None,
        }
    }

    pub fn with_input(mut self, input: ProductInput) -> Self {
        self.input = Some(input);
        self
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self, translator: &dyn Translator) -> ErrorResponse;
}
