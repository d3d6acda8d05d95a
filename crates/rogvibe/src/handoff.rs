//! Handing the terminal over to the winning command.
//!
//! The winner string is split like a shell would, its program is looked up on
//! `PATH`, and the current process image is replaced with it. Failures map to
//! the conventional shell exit codes: 127 not found, 126 not executable,
//! 1 for anything else.

use crate::error::HandoffError;
use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Editors that get the current directory appended when run bare.
pub const OPEN_HERE: [&str; 2] = ["code", "cursor"];

/// A fully resolved command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Where the program was found.
    pub path: PathBuf,
    /// Argument vector; `argv[0]` is the program name as written.
    pub argv: Vec<String>,
}

impl Invocation {
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}

/// Outcome of [`Handoff::execute`] when the process was not replaced.
#[derive(Debug)]
pub enum ExecResult {
    /// The command was empty; nothing ran.
    Nothing,
    Failed(HandoffError),
}

impl ExecResult {
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecResult::Nothing => 0,
            ExecResult::Failed(err) => err.exit_code(),
        }
    }
}

/// Finds executables by name.
pub trait Resolve {
    fn resolve(&self, program: &str) -> Option<PathBuf>;
}

/// Replaces the running process.
pub trait ProcessImage {
    /// Only returns on failure.
    fn replace(&mut self, invocation: &Invocation) -> io::Error;
}

/// Exclusive terminal state held by the presentation layer.
pub trait TerminalControl {
    /// Give the terminal back to a normal, cooked state.
    fn suspend(&mut self);
    /// Take the terminal again after a suspend.
    fn resume(&mut self);
}

/// A terminal nobody owns.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTerminal;

impl TerminalControl for NoTerminal {
    fn suspend(&mut self) {}
    fn resume(&mut self) {}
}

/// Suspends the terminal for as long as it lives.
struct Suspended<'a> {
    terminal: &'a mut dyn TerminalControl,
}

impl<'a> Suspended<'a> {
    fn new(terminal: &'a mut dyn TerminalControl) -> Self {
        terminal.suspend();
        Self { terminal }
    }
}

impl Drop for Suspended<'_> {
    fn drop(&mut self) {
        self.terminal.resume();
    }
}

/// Extensions tried on Windows when `PATHEXT` is unset.
const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Executable search path.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl SearchPath {
    /// Directories from the `PATH` environment variable, plus the `PATHEXT`
    /// extensions on Windows.
    pub fn from_env() -> Self {
        let search = Self::from_path_var(env::var_os("PATH"));
        if cfg!(windows) {
            let pathext = env::var("PATHEXT").unwrap_or_else(|_| DEFAULT_PATHEXT.to_string());
            search.with_extensions(pathext.split(';'))
        } else {
            search
        }
    }

    pub fn from_path_var(path: Option<OsString>) -> Self {
        let dirs = path
            .map(|p| env::split_paths(&p).filter(|d| !d.as_os_str().is_empty()).collect())
            .unwrap_or_default();
        Self {
            dirs,
            ..Self::default()
        }
    }

    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Extensions appended to bare names, e.g. `.cmd` for `code.cmd`.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// `base` itself, then `base` with each extension when it has none.
    fn find(&self, base: PathBuf) -> Option<PathBuf> {
        if is_executable(&base) {
            return Some(base);
        }
        if base.extension().is_some() {
            return None;
        }
        self.extensions
            .iter()
            .map(|ext| {
                let mut name = base.clone().into_os_string();
                name.push(ext);
                PathBuf::from(name)
            })
            .find(|candidate| is_executable(candidate))
    }
}

impl Resolve for SearchPath {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        if program.is_empty() {
            return None;
        }
        // Names with a separator are paths, not lookups.
        if program.contains(std::path::MAIN_SEPARATOR) || program.contains('/') {
            return self.find(PathBuf::from(program));
        }
        self.dirs.iter().find_map(|dir| self.find(dir.join(program)))
    }
}

/// A regular file the current user may execute.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    if !path.is_file() {
        return false;
    }
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string for the whole call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Replaces the process through the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcess;

impl ProcessImage for SystemProcess {
    #[cfg(unix)]
    fn replace(&mut self, invocation: &Invocation) -> io::Error {
        use std::os::unix::process::CommandExt;
        std::process::Command::new(&invocation.path)
            .arg0(invocation.program())
            .args(invocation.args())
            .exec()
    }

    #[cfg(not(unix))]
    fn replace(&mut self, invocation: &Invocation) -> io::Error {
        // No exec(2) here: run the child to completion and leave with its code.
        match std::process::Command::new(&invocation.path)
            .args(invocation.args())
            .status()
        {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(err) => err,
        }
    }
}

/// Turns a winner string into a running program.
#[derive(Debug, Clone)]
pub struct Handoff<R = SearchPath, P = SystemProcess> {
    resolver: R,
    image: P,
}

impl Handoff {
    /// Resolves on `PATH` and replaces the real process.
    pub fn system() -> Self {
        Self::new(SearchPath::from_env(), SystemProcess)
    }
}

impl<R: Resolve, P: ProcessImage> Handoff<R, P> {
    pub fn new(resolver: R, image: P) -> Self {
        Self { resolver, image }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn image(&self) -> &P {
        &self.image
    }

    /// Works out what `winner` would run, without running it.
    ///
    /// `Ok(None)` means the command is empty.
    pub fn plan(&self, winner: &str) -> Result<Option<Invocation>, HandoffError> {
        let argv = split_command(winner)?;
        let Some(program) = argv.first() else {
            return Ok(None);
        };
        let path = self
            .resolver
            .resolve(program)
            .ok_or_else(|| HandoffError::CommandNotFound(program.clone()))?;
        Ok(Some(Invocation { path, argv }))
    }

    /// Runs `winner` in place of the current process.
    ///
    /// The terminal is suspended right before the process image is replaced
    /// and resumed again if replacing fails. On success this never returns.
    pub fn execute(&mut self, winner: &str, terminal: &mut dyn TerminalControl) -> ExecResult {
        let invocation = match self.plan(winner) {
            Ok(Some(invocation)) => invocation,
            Ok(None) => return ExecResult::Nothing,
            Err(err) => {
                log::warn!("{}", err);
                return ExecResult::Failed(err);
            }
        };

        log::info!(
            "handing off to {} {:?}",
            invocation.path.display(),
            invocation.argv
        );
        let err = {
            let _suspended = Suspended::new(terminal);
            self.image.replace(&invocation)
        };

        let program = invocation.program().to_string();
        let err = match err.kind() {
            io::ErrorKind::NotFound => HandoffError::CommandNotFound(program),
            io::ErrorKind::PermissionDenied => HandoffError::PermissionDenied(program),
            _ => HandoffError::ExecFailure {
                program,
                source: err,
            },
        };
        log::warn!("{}", err);
        ExecResult::Failed(err)
    }
}

/// Shell-style split, after expanding bare editor names to open `.`.
pub fn split_command(winner: &str) -> Result<Vec<String>, HandoffError> {
    let command = if OPEN_HERE.contains(&winner) {
        format!("{} .", winner)
    } else {
        winner.to_string()
    };
    shell_words::split(&command).map_err(|source| HandoffError::InvalidCommand { command, source })
}
