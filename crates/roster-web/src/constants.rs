// Validation
pub const MAX_FILE_SIZE_BYTES: usize = 1_000_000; // ~1 MB
