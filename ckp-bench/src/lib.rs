pub mod benchmark;
pub mod instances;
pub mod report;
pub mod settings;
