pub const SEED_PREFIX: &[u8] = b"bufferpool";
pub const SEED_QUEUE: &[u8] = b"queue";
pub const SEED_CRANK: &[u8] = b"crank";
pub const SEED_ORACLE: &[u8] = b"oracle";
pub const SEED_PERMISSION: &[u8] = b"permission";
pub const SEED_JOB: &[u8] = b"job";
pub const SEED_BUFFER: &[u8] = b"buffer";
