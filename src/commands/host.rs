use std::io::Write;

/// The process environment a command runs in.
///
/// Commands write reports and warnings through this seam instead of touching
/// stdout/stderr directly, so tests can capture everything a command emits
/// and observe the exit code it requested.
pub trait Host: Send + Sync {
    /// Sink for report output (stdout in the real binary).
    fn output(&mut self) -> impl Write;

    /// Sink for warnings and errors (stderr in the real binary).
    fn error(&mut self) -> impl Write;

    /// Request process termination with `code`. Test hosts record the code
    /// instead of exiting.
    fn exit(&mut self, code: i32);
}

/// In-memory host for unit tests: buffers both streams and records the exit
/// code rather than terminating.
#[cfg(test)]
pub struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}
