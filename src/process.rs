// Line-oriented subprocess plumbing
//
// fast_align and atools both speak a strict one-line-in/one-line-out protocol
// over stdin/stdout. This module owns the plumbing shared by all three child
// handles:
// - spawn with all three standard streams piped
// - a background thread draining the child's stderr for the whole process
//   lifetime (fast_align is chatty on stderr; an undrained pipe fills up and
//   blocks the child, which deadlocks the lock-step protocol)
// - buffered line writes, single blocking line reads, ordered shutdown

use std::ffi::OsString;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

#[path = "process_test.rs"]
mod process_test;

/// One long-running child process with exclusive ownership of its pipes.
pub struct LineProcess {
    name: String,
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stdout: BufReader<ChildStdout>,
    stderr_drain: JoinHandle<()>,
}

impl LineProcess {
    /// Spawn `program` with `args`, piping all three standard streams.
    ///
    /// The child's stderr is handed to a background drain thread immediately.
    /// The thread copies until end-of-file and therefore ends on its own when
    /// the child exits; it is joined during `shutdown`, never cancelled.
    pub fn spawn(program: &Path, args: &[OsString]) -> io::Result<Self> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdin = BufWriter::new(child.stdin.take().expect("child stdin is piped"));
        let stdout = BufReader::new(child.stdout.take().expect("child stdout is piped"));
        let mut stderr = child.stderr.take().expect("child stderr is piped");

        let stderr_drain = thread::spawn(move || {
            let _ = io::copy(&mut stderr, &mut io::sink());
        });

        Ok(LineProcess {
            name: program.display().to_string(),
            child,
            stdin,
            stdout,
            stderr_drain,
        })
    }

    /// Queue one line (a terminator is appended) on the child's stdin.
    /// Nothing reaches the child until `flush`.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.stdin.write_all(line.as_bytes())?;
        self.stdin.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdin.flush()
    }

    /// Single blocking read of one output line, trailing terminator stripped.
    ///
    /// End-of-file means the child closed its output (it crashed or exited);
    /// the protocol has no legitimate mid-stream EOF, so that surfaces as an
    /// error naming the program.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let n = self.stdout.read_line(&mut line)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("{} closed its output stream", self.name),
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// One lock-step round trip: write the line, flush, read exactly one line.
    pub fn round_trip(&mut self, line: &str) -> io::Result<String> {
        self.write_line(line)?;
        self.flush()?;
        self.read_line()
    }

    /// Close the child's stdin (it sees end-of-input) and block until it
    /// exits. No timeout is applied; a hung child hangs the caller.
    pub fn shutdown(self) -> io::Result<ExitStatus> {
        let LineProcess {
            name: _,
            mut child,
            stdin,
            stdout: _,
            stderr_drain,
        } = self;
        drop(stdin);
        let status = child.wait()?;
        // The drain thread hits EOF once the child is gone.
        let _ = stderr_drain.join();
        Ok(status)
    }
}
