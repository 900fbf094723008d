pub mod locale;
pub mod static_translator;
