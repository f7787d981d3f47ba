//! Process environment adapter

use snake_application::EnvironmentSource;

/// [`EnvironmentSource`] backed by the real process environment.
///
/// Non-UTF-8 values are converted lossily rather than treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}
