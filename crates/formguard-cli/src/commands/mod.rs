pub mod check;
pub mod field;
pub mod rules;
