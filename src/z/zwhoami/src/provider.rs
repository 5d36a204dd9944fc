// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::ffi::OsString;

use thiserror::Error;

use crate::selector::NameSelector;

/// The operating system could not report a name.
///
/// `code` is the platform diagnostic: `GetLastError()` on Windows, `errno`
/// on Unix. The `Display` form is the body of the stderr diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: GetLastError={code}")]
pub struct NameQueryError {
    pub selector: NameSelector,
    pub code: i64,
}

impl NameQueryError {
    pub fn new(selector: NameSelector, code: impl Into<i64>) -> Self {
        Self {
            selector,
            code: code.into(),
        }
    }
}

/// Outcome of a single name query.
pub type NameResult = Result<OsString, NameQueryError>;

/// Something that can resolve the computer's name for a selector.
///
/// Implementations must ask the source again on every call; the reporter
/// relies on each query being independent.
pub trait ComputerNameProvider {
    fn resolve(&self, selector: NameSelector) -> NameResult;
}

impl<P: ComputerNameProvider + ?Sized> ComputerNameProvider for &P {
    fn resolve(&self, selector: NameSelector) -> NameResult {
        (**self).resolve(selector)
    }
}
