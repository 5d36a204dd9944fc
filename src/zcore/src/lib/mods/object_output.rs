//! Common object (JSON) output utilities
//!
//! This module provides shared functionality for outputting command results
//! as structured JSON objects when the `--obj` flag is specified, along with
//! optional verbose mode via the `--verbose-json` flag.

use clap::{Arg, ArgAction};
use serde_json::Value as JsonValue;
use std::io::{self, Write};

/// Options for object (JSON) output and verbosity
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOutputOptions {
    /// Whether to output as object (JSON) (--obj flag)
    pub object_output: bool,
    /// Whether to include verbose output (--verbose-json flag)
    pub verbose: bool,
    /// Whether to pretty-print JSON output (--pretty flag)
    pub pretty: bool,
}

impl JsonOutputOptions {
    /// Create an instance from clap matches
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        Self {
            object_output: matches.get_flag(ARG_OBJECT_OUTPUT),
            verbose: matches.get_flag(ARG_VERBOSE),
            pretty: matches.get_flag(ARG_PRETTY),
        }
    }
}

/// Argument names for object (JSON) output and verbose flags
pub const ARG_OBJECT_OUTPUT: &str = "object_output";
pub const ARG_VERBOSE: &str = "verbose_json";
pub const ARG_FIELD: &str = "field";
pub const ARG_PRETTY: &str = "pretty";

/// Add object (JSON) output and verbose arguments to a clap Command
pub fn add_json_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        Arg::new(ARG_OBJECT_OUTPUT)
            .long("obj")
            .help("Output as object (JSON)")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new(ARG_VERBOSE)
            .long("verbose-json")
            .help("Include additional details in JSON output (use with --obj)")
            .requires(ARG_OBJECT_OUTPUT)
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new(ARG_PRETTY)
            .long("pretty")
            .help("Pretty-print object (JSON) output (use with --obj)")
            .requires(ARG_OBJECT_OUTPUT)
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new(ARG_FIELD)
            .long("field")
            .value_name("FIELD")
            .help("Filter object output to specific field(s) (comma-separated)")
            .requires(ARG_OBJECT_OUTPUT)
            .action(ArgAction::Set),
    )
}

/// Filter a JSON object to include only specified fields
///
/// # Arguments
/// * `value` - The JSON value to filter (must be an Object)
/// * `field_spec` - Comma-separated field names (e.g., "ComputerNameDnsDomain")
///
/// Returns filtered object, or original value if not an object or field_spec is empty.
/// Fields keep the order in which they appear in `value`.
pub fn filter_fields(value: JsonValue, field_spec: Option<&str>) -> JsonValue {
    let Some(spec) = field_spec else {
        return value;
    };
    let JsonValue::Object(obj) = value else {
        return value;
    };

    let fields: Vec<&str> = spec
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if fields.is_empty() {
        return JsonValue::Object(obj);
    }

    let filtered = obj
        .into_iter()
        .filter(|(key, _)| fields.contains(&key.as_str()))
        .collect();
    JsonValue::Object(filtered)
}

/// Serialize `value` to `out` followed by a newline, honouring `--pretty`.
pub fn write_json<W: Write + ?Sized>(
    out: &mut W,
    options: JsonOutputOptions,
    value: &JsonValue,
) -> io::Result<()> {
    if options.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    out.write_all(b"\n")
}

/// Conditionally output object (JSON) or perform default output
///
/// If `options.object_output` is true, serializes the value produced by `value` as JSON and prints it.
/// Otherwise, calls the provided `default_output` closure to perform default (text) output.
///
/// # Arguments
/// * `options` - Object (JSON) output options
/// * `value` - Builds the JSON value to output if object mode is enabled
/// * `default_output` - Closure that performs default (non-object) output
pub fn output<V, F>(options: JsonOutputOptions, value: V, default_output: F) -> io::Result<()>
where
    V: FnOnce() -> io::Result<JsonValue>,
    F: FnOnce() -> io::Result<()>,
{
    if options.object_output {
        let value = value()?;
        let mut stdout = io::stdout().lock();
        write_json(&mut stdout, options, &value)?;
        stdout.flush()
    } else {
        default_output()
    }
}
