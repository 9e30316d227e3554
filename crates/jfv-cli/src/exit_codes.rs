//! Process exit codes shared by all commands.

pub mod codes {
    /// Command completed.
    pub const SUCCESS: u8 = 0;
    /// Fetch, decode or usage failure.
    pub const GENERIC_ERROR: u8 = 1;
}
