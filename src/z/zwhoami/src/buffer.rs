// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Fixed-size UTF-16 buffer handed to `GetComputerNameExW`.

/// Capacity in UTF-16 code units, terminator included. DNS names top out
/// around 255 characters.
pub const NAME_BUFFER_LEN: usize = 1024;

pub struct NameBuffer {
    units: [u16; NAME_BUFFER_LEN],
}

impl NameBuffer {
    pub fn new() -> Self {
        Self {
            units: [0; NAME_BUFFER_LEN],
        }
    }

    /// Capacity to report to the OS, in characters.
    #[cfg(windows)]
    pub fn capacity(&self) -> u32 {
        NAME_BUFFER_LEN as u32
    }

    #[cfg(windows)]
    pub fn as_mut_ptr(&mut self) -> *mut u16 {
        self.units.as_mut_ptr()
    }

    /// The first `len` units written by the OS. `len` is clamped to the
    /// buffer so a bogus length can never read past the end.
    pub fn written(&self, len: u32) -> &[u16] {
        let len = (len as usize).min(self.units.len());
        &self.units[..len]
    }

    #[cfg(test)]
    fn fill(&mut self, text: &str) -> u32 {
        let mut len = 0;
        for (slot, unit) in self.units.iter_mut().zip(text.encode_utf16()) {
            *slot = unit;
            len += 1;
        }
        if len < self.units.len() {
            self.units[len] = 0;
        }
        len as u32
    }
}

impl Default for NameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
