pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Storage keys under which the bootstrapped session is persisted client-side.
pub const SESSION_TOKEN_KEY: &str = "token";
pub const SESSION_NAME_KEY: &str = "name";

pub const DEFAULT_MOOD: &str = "Neutral";

pub const HISTORY_PATH: &str = "history.txt";
pub const SESSION_PATH: &str = "session.json";
