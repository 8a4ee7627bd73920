// Input polling interval for the terminal event loop
pub const POLL_INTERVAL_MS: u64 = 50;

// Default guess count offered on the setup screen
pub const DEFAULT_GUESS_COUNT: usize = 20;

// Export file naming: departements_<epoch_ms>.json
pub const EXPORT_FILE_PREFIX: &str = "departements";
