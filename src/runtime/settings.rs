use quaver::config;
use quaver::error::Error;

/// Load settings, falling back to defaults when the file or environment is
/// unusable. The error is handed back so it can be logged once logging is up.
pub fn load_settings() -> (config::Settings, Option<Error>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(e) => (config::Settings::default(), Some(e)),
        },
        Err(e) => (config::Settings::default(), Some(e)),
    }
}
