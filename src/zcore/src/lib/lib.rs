//! library ~ (core/bundler file)
//
// spell-checker:ignore SIGBUS SIGSEGV

//## internal modules

mod macros; // crate macros (macro_rules-type; exported to `crate::...`)
mod mods; // core cross-platform modules

pub use crate::mods::clap_localization;
pub use crate::mods::display;
pub use crate::mods::error;
pub use crate::mods::locale;
pub use crate::mods::object_output;
pub use crate::mods::panic;

// * pub re-exports of proc-macros
pub use zcore_procs::main;

#[cfg(unix)]
use nix::errno::Errno;
#[cfg(unix)]
use nix::sys::signal::{
    SigHandler::SigDfl,
    Signal::{SIGBUS, SIGSEGV},
    signal,
};

use std::ffi::OsString;
use std::path::Path;
use std::sync::LazyLock;

/// Restores the default disposition of the fatal signals that the Rust
/// runtime installs handlers for, so a crash still dumps core.
#[cfg(unix)]
pub fn disable_rust_signal_handlers() -> Result<(), Errno> {
    // SAFETY: SigDfl is always a valid handler and no other thread exists yet.
    unsafe { signal(SIGSEGV, SigDfl) }?;
    // SAFETY: see above.
    unsafe { signal(SIGBUS, SigDfl) }?;
    Ok(())
}

/// Execute utility code for `util`.
///
/// This macro expands to a main function that invokes the `uumain` function in `util`.
/// Exits with code returned by `uumain`.
#[macro_export]
macro_rules! bin {
    ($util:ident) => {
        pub fn main() {
            // suppress extraneous error output for SIGPIPE failures/panics
            zcore::panic::mute_sigpipe_panic();
            // execute utility code
            let code = $util::uumain(zcore::args_os());
            // flush stdout before exit; see <https://github.com/rust-lang/rust/issues/23818>
            if let Err(e) = std::io::Write::flush(&mut std::io::stdout()) {
                eprintln!("Error flushing stdout: {e}");
            }

            std::process::exit(code);
        }
    };
}

/// Generate the version string for clap.
///
/// The generated string has the format `<version number>`, for
/// example: "0.1.0".
#[macro_export]
macro_rules! crate_version {
    () => {
        env!("CARGO_PKG_VERSION")
    };
}

/// Arguments of a utility, as handed over by the operating system.
pub trait Args: Iterator<Item = OsString> + Sized {}

impl<T: Iterator<Item = OsString> + Sized> Args for T {}

/// Returns the raw command line arguments of the process.
pub fn args_os() -> impl Iterator<Item = OsString> {
    std::env::args_os()
}

static EXECUTION_PHRASE: LazyLock<String> = LazyLock::new(|| {
    std::env::args_os()
        .next()
        .map(|arg0| arg0.to_string_lossy().into_owned())
        .unwrap_or_default()
});

static UTIL_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
});

/// Derive the utility name.
pub fn util_name() -> &'static str {
    &UTIL_NAME
}

/// Derive the complete execution phrase for "usage".
pub fn execution_phrase() -> &'static str {
    &EXECUTION_PHRASE
}

/// Indents every continuation line of a usage string so it lines up after
/// the `Usage: ` heading.
pub fn format_usage(s: &str) -> String {
    s.replace('\n', &format!("\n{}", " ".repeat(7)))
}

/// Builds the clap help template with the localized usage heading.
pub fn localized_help_template(util_name: &str) -> clap::builder::StyledStr {
    let usage_label = crate::translate!("common-usage");
    format!(
        "{{before-help}}{util_name} {{version}}\n{{about-with-newline}}\n{usage_label}: {{usage}}\n\n{{all-args}}{{after-help}}"
    )
    .into()
}
