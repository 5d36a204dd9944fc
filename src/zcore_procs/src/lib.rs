// spell-checker:ignore SIGSEGV

//! Procedural macros for the zwhoami utilities.
#![deny(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;

//## rust proc-macro background info
//* ref: <https://dev.to/naufraghi/procedural-macro-in-rust-101-k3f> @@ <http://archive.is/Vbr5e>

/// Defines the `uumain` entry point of a utility.
///
/// The annotated item must be a function named `zwmain` taking
/// `impl zcore::Args` and returning `zcore::error::UResult<()>`. The generated
/// `uumain` returns the process exit code.
#[proc_macro_attribute]
pub fn main(_args: TokenStream, stream: TokenStream) -> TokenStream {
    let stream = proc_macro2::TokenStream::from(stream);

    let new = quote!(
        pub fn uumain(args: impl zcore::Args) -> i32 {
            #stream

            // disable rust signal handlers (otherwise processes don't dump core after e.g. one SIGSEGV)
            #[cfg(unix)]
            zcore::disable_rust_signal_handlers().expect("Disabling rust signal handlers failed");
            let result = zwmain(args);
            match result {
                Ok(()) => zcore::error::get_exit_code(),
                Err(e) => {
                    let s = format!("{e}");
                    if !s.is_empty() {
                        zcore::show_error!("{s}");
                    }
                    if e.usage() {
                        eprintln!("Try '{} --help' for more information.", zcore::execution_phrase());
                    }
                    e.code()
                }
            }
        }
    );

    TokenStream::from(new)
}
