// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::System::SystemInformation::{COMPUTER_NAME_FORMAT, GetComputerNameExW};

use crate::buffer::NameBuffer;
use crate::provider::{ComputerNameProvider, NameQueryError, NameResult};
use crate::selector::NameSelector;

/// Asks `GetComputerNameExW` for every query.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNameProvider;

impl SystemNameProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ComputerNameProvider for SystemNameProvider {
    fn resolve(&self, selector: NameSelector) -> NameResult {
        let mut buffer = NameBuffer::new();
        let mut size = buffer.capacity();
        let format: COMPUTER_NAME_FORMAT = selector.format();

        // SAFETY: the pointer and `size` describe `buffer`, which outlives the call.
        let ok = unsafe { GetComputerNameExW(format, buffer.as_mut_ptr(), &mut size) };
        if ok == 0 {
            // SAFETY: no other API call happened since GetComputerNameExW failed.
            let code = unsafe { GetLastError() };
            return Err(NameQueryError::new(selector, code));
        }

        // on success `size` excludes the terminating null
        Ok(OsString::from_wide(buffer.written(size)))
    }
}
