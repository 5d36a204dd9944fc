// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Exit codes and error types returned from `zwmain`.
//!
//! * `0`: succeeded
//! * `1`: the report could not be written, or the arguments were unusable
//!
//! [`UResult`] is a [`Result`] with a custom error trait: [`UError`]. Unlike
//! a plain [`std::error::Error`], a [`UError`] carries the exit code the
//! program ends with when it is returned from `zwmain`:
//! * When `Ok` is returned, [`get_exit_code`] is used, which is `0`.
//! * When `Err` is returned, the error's code is used and its message is
//!   displayed.
//!
//! ```ignore
//! fn zwmain(args: impl zcore::Args) -> UResult<()> {
//!     ...
//! }
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Exit code used when `zwmain` returns `Ok(())`. Failed name queries never
/// change it.
pub const fn get_exit_code() -> i32 {
    0
}

/// Result type that should be returned by all utils.
pub type UResult<T> = Result<T, Box<dyn UError>>;

/// Custom errors defined by the utils and `zcore`.
///
/// All errors should implement [`std::error::Error`], [`std::fmt::Display`] and
/// [`std::fmt::Debug`] and have an additional `code` method that specifies the
/// exit code of the program if the error is returned from `zwmain`.
///
/// `clap_localization::ClapErrorWrapper` is one such error: it prints
/// nothing and only carries the exit code of a failed parse.
pub trait UError: Error + Send {
    /// Error code of a custom error.
    ///
    /// Set a return value for each variant of an enum-type to associate an
    /// error code (which is returned to the system shell) with an error
    /// variant.
    fn code(&self) -> i32 {
        1
    }

    /// Print usage help to a custom error.
    ///
    /// Return true or false to control whether a short usage help is printed
    /// below the error message. The usage help is in the format: "Try `{name}
    /// --help` for more information." and printed only if `true` is returned.
    fn usage(&self) -> bool {
        false
    }
}

impl<T> From<T> for Box<dyn UError>
where
    T: UError + 'static,
{
    fn from(t: T) -> Self {
        Box::new(t)
    }
}

/// Wrapper type around [`std::io::Error`].
///
/// The messages displayed by [`UIoError`] should match the error messages displayed by GNU
/// coreutils.
///
/// Built by calling [`FromIo::map_err_context`] on a [`std::io::Result`] or
/// [`std::io::Error`], or by converting an [`std::io::Error`] directly.
/// ```
/// use zcore::error::{FromIo, UResult};
/// use std::io::{self, Write};
///
/// let _res: UResult<()> = io::stdout()
///     .flush()
///     .map_err_context(|| "failed to print computer names".to_string());
/// ```
#[derive(Debug)]
pub struct UIoError {
    context: Option<String>,
    inner: io::Error,
}

impl UError for UIoError {}

impl Error for UIoError {}

impl Display for UIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        use io::ErrorKind::*;

        let message;
        let message = if self.inner.raw_os_error().is_some() {
            // These are errors that come directly from the OS.
            // We want to normalize their messages across systems,
            // and we want to strip the "(os error X)" suffix.
            match self.inner.kind() {
                NotFound => "No such file or directory",
                PermissionDenied => "Permission denied",
                BrokenPipe => "Broken pipe",
                WouldBlock => "Resource temporarily unavailable",
                Unsupported => "Operation not supported",
                _ => {
                    message = capitalize(&strip_errno(&self.inner));
                    &message
                }
            }
        } else {
            // These messages don't need as much normalization, and the above
            // messages wouldn't always be a good substitute.
            // For example, ErrorKind::NotFound doesn't necessarily mean it was
            // a file that was not found.
            // There are also errors with entirely custom messages.
            message = self.inner.to_string();
            &message
        };
        if let Some(ctx) = &self.context {
            write!(f, "{ctx}: {message}")
        } else {
            write!(f, "{message}")
        }
    }
}

/// Capitalize the first character of an error message.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip the trailing " (os error XX)" from io error strings.
pub fn strip_errno(err: &io::Error) -> String {
    let mut msg = err.to_string();
    if let Some(pos) = msg.find(" (os error ") {
        msg.truncate(pos);
    }
    msg
}

/// Enables the conversion from [`Result<T, std::io::Error>`] to [`UResult<T>`] and from
/// [`std::io::Error`] to [`UError`].
pub trait FromIo<T> {
    fn map_err_context(self, context: impl FnOnce() -> String) -> T;
}

impl FromIo<Box<UIoError>> for io::Error {
    fn map_err_context(self, context: impl FnOnce() -> String) -> Box<UIoError> {
        Box::new(UIoError {
            context: Some((context)()),
            inner: self,
        })
    }
}

impl<T> FromIo<UResult<T>> for io::Result<T> {
    fn map_err_context(self, context: impl FnOnce() -> String) -> UResult<T> {
        self.map_err(|e| e.map_err_context(context) as Box<dyn UError>)
    }
}

impl From<io::Error> for UIoError {
    fn from(f: io::Error) -> Self {
        Self {
            context: None,
            inner: f,
        }
    }
}

impl From<io::Error> for Box<dyn UError> {
    fn from(f: io::Error) -> Self {
        let u_error: UIoError = f.into();
        Box::new(u_error) as Self
    }
}
