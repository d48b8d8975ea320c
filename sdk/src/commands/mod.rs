pub mod buffer;
pub mod crank;
pub mod job;
pub mod oracle;
pub mod permission;
pub mod queue;
