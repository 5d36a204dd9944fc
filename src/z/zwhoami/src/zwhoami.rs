// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore netbios

use std::io;

use clap::{Arg, ArgAction, Command};
use zcore::error::{FromIo, UResult};
use zcore::locale::EmbeddedLocale;
use zcore::object_output::{self, JsonOutputOptions};
use zcore::{format_usage, show_warning, translate};

#[cfg(any(windows, test))]
mod buffer;
mod platform;
pub mod provider;
pub mod reporter;
pub mod selector;

pub use platform::SystemNameProvider;
pub use provider::{ComputerNameProvider, NameQueryError, NameResult};
pub use reporter::NameReporter;
pub use selector::{NameQuery, NameSelector, QUERIES};

/// Operands are accepted and ignored; the report never depends on them.
const ARG_IGNORED: &str = "ignored";

const LOCALES: &[EmbeddedLocale] = &[EmbeddedLocale {
    locale: "en-US",
    source: include_str!("../locales/en-US.ftl"),
}];

#[zcore::main]
pub fn zwmain(args: impl zcore::Args) -> UResult<()> {
    if let Err(e) = zcore::locale::setup_localization("zwhoami", LOCALES) {
        show_warning!("{}", translate!("zwhoami-warning-localization", "error" => e));
    }

    let matches = zcore::clap_localization::handle_clap_result(zw_app(), args)?;
    let opts = JsonOutputOptions::from_matches(&matches);
    let field_filter = matches
        .get_one::<String>(object_output::ARG_FIELD)
        .map(|s| s.as_str());

    let reporter = NameReporter::new(SystemNameProvider::new());
    let stdout = io::stdout();
    let stderr = io::stderr();

    object_output::output(
        opts,
        || {
            let names = reporter.report_json(opts.verbose, &mut stderr.lock())?;
            Ok(object_output::filter_fields(names, field_filter))
        },
        || reporter.report_all(&mut stdout.lock(), &mut stderr.lock()),
    )
    .map_err_context(|| translate!("zwhoami-error-failed-to-print"))?;

    Ok(())
}

pub fn zw_app() -> Command {
    let cmd = Command::new(zcore::util_name())
        .version(zcore::crate_version!())
        .help_template(zcore::localized_help_template(zcore::util_name()))
        .about(translate!("zwhoami-about"))
        .override_usage(format_usage(&translate!("zwhoami-usage")))
        .after_help(translate!("zwhoami-after-help"))
        .infer_long_args(true)
        .arg(
            Arg::new(ARG_IGNORED)
                .action(ArgAction::Append)
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .hide(true),
        );

    object_output::add_json_args(cmd)
}
