// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Write OS-provided text exactly as the OS returned it.
//!
//! Host names come back from the operating system as [`OsStr`]s. On Unix
//! they are written byte for byte; on Windows the wide string is converted
//! and unpaired surrogates become U+FFFD, the same way the console would
//! render them.

use std::ffi::OsStr;
use std::io::{self, Write};

/// Write `text` to `out` without quoting or escaping.
pub fn write_verbatim<W: Write + ?Sized, S: AsRef<OsStr>>(out: &mut W, text: S) -> io::Result<()> {
    let text = text.as_ref();
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(text.as_bytes())
    }
    #[cfg(not(unix))]
    {
        out.write_all(text.to_string_lossy().as_bytes())
    }
}
