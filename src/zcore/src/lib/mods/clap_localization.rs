// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Glue between clap's argument errors and [`UResult`].
//!
//! Help and version requests are printed to stdout and end the utility with
//! exit code 0. Every other parse error is printed by clap itself (with the
//! usage line) and ends the utility with exit code 1.

use crate::error::{UError, UResult};

use clap::error::ErrorKind;
use clap::{ArgMatches, Command};
use std::ffi::OsString;
use std::fmt;

/// A clap error that has already been rendered to the terminal.
#[derive(Debug)]
pub struct ClapErrorWrapper {
    code: i32,
}

impl std::error::Error for ClapErrorWrapper {}

impl fmt::Display for ClapErrorWrapper {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl UError for ClapErrorWrapper {
    fn code(&self) -> i32 {
        self.code
    }
}

/// Exit code of a clap error: 0 for `--help`/`--version`, `usage_code` otherwise.
fn exit_code_for(kind: ErrorKind, usage_code: i32) -> i32 {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => usage_code,
    }
}

/// Parse `args` with `cmd`, printing clap's own output on failure.
pub fn handle_clap_result<I, T>(cmd: Command, args: I) -> UResult<ArgMatches>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    cmd.try_get_matches_from(args).map_err(|e| {
        let code = exit_code_for(e.kind(), 1);
        // clap routes help/version to stdout and real errors to stderr
        let _ = e.print();
        ClapErrorWrapper { code }.into()
    })
}
