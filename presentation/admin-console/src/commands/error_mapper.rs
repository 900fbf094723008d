use business::domain::product::errors::ProductError;
use business::domain::translator::Translator;

use crate::commands::error::{ErrorResponse, FieldErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self, translator: &dyn Translator) -> ErrorResponse {
        match self {
            ProductError::Invalid(errors) => {
                let mut response = ErrorResponse::new("ValidationError", "product.invalid");
                response.errors = errors
                    .codes()
                    .iter()
                    .map(|code| FieldErrorResponse {
                        code: code.to_string(),
                        message: translator.translate(*code),
                    })
                    .collect();
                response
            }
            ProductError::NotFound => ErrorResponse::new("NotFound", "product.not_found"),
            ProductError::Repository(_) => {
                ErrorResponse::new("InternalError", "repository.persistence")
            }
        }
    }
}
