pub mod accountdata;
pub mod accounttype;
pub mod buffer;
pub mod clock;
pub mod crankstate;
pub mod job;
pub mod oracle;
pub mod permission;
pub mod queue;
