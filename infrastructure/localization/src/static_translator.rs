use business::domain::product::error_code::ErrorCode;
use business::domain::translator::Translator;

use crate::locale::Locale;

/// Translator backed by message tables compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTranslator {
    locale: Locale,
}

impl StaticTranslator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Translator for StaticTranslator {
    fn translate(&self, code: ErrorCode) -> String {
        message(self.locale, code).to_string()
    }
}

fn message(locale: Locale, code: ErrorCode) -> &'static str {
    match locale {
        Locale::En => english(code),
        Locale::Fr => french(code),
        Locale::Es => spanish(code),
    }
}

fn english(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::MissingName => "Please enter a name",
        ErrorCode::MissingPrice => "Please enter a price",
        ErrorCode::PriceNotANumber => "The value entered for the price must be a number",
        ErrorCode::PriceNotGreaterThanZero => "The price must be greater than zero",
        ErrorCode::MissingQuantity => "Please enter a stock value",
        ErrorCode::StockNotAnInteger => "The value entered for the stock must be an integer",
        ErrorCode::StockNotGreaterThanZero => "The stock must be greater than zero",
    }
}

fn french(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::MissingName => "Veuillez saisir un nom",
        ErrorCode::MissingPrice => "Veuillez saisir un prix",
        ErrorCode::PriceNotANumber => "La valeur saisie pour le prix doit être un nombre",
        ErrorCode::PriceNotGreaterThanZero => "Le prix doit être supérieur à zéro",
        ErrorCode::MissingQuantity => "Veuillez saisir une quantité en stock",
        ErrorCode::StockNotAnInteger => "La valeur saisie pour le stock doit être un entier",
        ErrorCode::StockNotGreaterThanZero => "Le stock doit être supérieur à zéro",
    }
}

fn spanish(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::MissingName => "Por favor, introduzca un nombre",
        ErrorCode::MissingPrice => "Por favor, introduzca un precio",
        ErrorCode::PriceNotANumber => "El valor introducido para el precio debe ser un número",
        ErrorCode::PriceNotGreaterThanZero => "El precio debe ser mayor que cero",
        ErrorCode::MissingQuantity => "Por favor, introduzca un valor de existencias",
        ErrorCode::StockNotAnInteger => {
            "El valor introducido para las existencias debe ser un número entero"
        }
        ErrorCode::StockNotGreaterThanZero => "Las existencias deben ser mayores que cero",
    }
}
