pub mod calculator;
pub mod logic;
pub mod normalizer;
pub mod validity;
