use crate::error::CommandError;
use std::{
    io::{self, Read},
    process::{Command, Stdio},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};
use tracing::trace;

/// How often a running child is checked for completion
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Runs an external program and returns its standard output
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError>;
}

/// Spawns real processes, killing them if they outlive `timeout`
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Read a child pipe to the end on its own thread
///
/// The child blocks once a pipe buffer fills up, so both pipes are
/// drained while it runs instead of after it exits.
fn drain<P: Read + Send + 'static>(pipe: Option<P>) -> JoinHandle<io::Result<String>> {
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_string(&mut buf)?;
        }
        Ok(buf)
    })
}

fn collect(reader: JoinHandle<io::Result<String>>) -> io::Result<String> {
    reader
        .join()
        .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Other, "pipe reader panicked")))
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        trace!("Running {} {}", program, args.join(" "));
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait()? {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(CommandError::Timeout(self.timeout));
                }
                None => thread::sleep(POLL_INTERVAL),
            }
        };

        let stdout = collect(stdout)?;
        let stderr = collect(stderr).unwrap_or_default();

        if status.success() {
            Ok(stdout)
        } else {
            Err(CommandError::Status {
                code: status.code(),
                stderr,
            })
        }
    }
}
