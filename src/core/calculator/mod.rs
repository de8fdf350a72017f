pub mod accuracy;
pub mod comparison;
pub mod diagnostics;
pub mod statistics;
