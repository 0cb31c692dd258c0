use psutil::process;
use tracing::warn;

/// Check whether a process called `name` is running
pub fn daemon_running(name: &str) -> bool {
    let processes = match process::processes() {
        Ok(p) => p,
        Err(e) => {
            warn!("Failed to list processes: {}", e);
            return false;
        }
    };

    processes
        .into_iter()
        .filter_map(Result::ok)
        .any(|p| p.name().map(|n| n == name).unwrap_or(false))
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn unknown_process_is_not_running() {
        assert!(!daemon_running("pwclockctl-no-such-daemon"));
    }
}
