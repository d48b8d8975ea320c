pub mod create;
pub mod set;
