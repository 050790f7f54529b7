
use parley_config::Config;
use tempfile::TempDir;

use crate::state::AppState;

/// App state whose files all live in a fresh temp dir
pub(crate) fn test_state() -> (TempDir, AppState) {
    let dir = TempDir::new().expect("temp dir");
    let mut config = Config::default();
    config.dictionary.data_dir = dir.path().to_path_buf();
    config.locale = "en-US".to_string();
    let state = AppState::new(config);
    (dir, state)
}
