use std::time::Duration;

/// Origin of the game server.
pub const DEFAULT_SERVER: &str = "http://localhost:5000";
/// Length of the cross-fade between the landing and game view.
pub const DEFAULT_FADE: Duration = Duration::from_millis(500);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub server: String,
    pub fade: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: DEFAULT_SERVER.to_owned(),
            fade: DEFAULT_FADE,
        }
    }
}

impl Config {
    /// Full url of an endpoint on the game server.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.server.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
