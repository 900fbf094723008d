pub mod console;
pub mod dependency_injection;
