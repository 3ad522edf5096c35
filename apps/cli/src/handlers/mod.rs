pub mod check;
pub mod kinds;
