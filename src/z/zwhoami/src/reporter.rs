// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::io::{self, Write};

use serde_json::{Map, Value as JsonValue, json};
use zcore::display::write_verbatim;

use crate::provider::{ComputerNameProvider, NameResult};
use crate::selector::{NameQuery, QUERIES};

/// Runs every [`QUERIES`] entry against a provider and reports the answers.
///
/// Each query is independent: a failure is reported on the error stream
/// and the remaining queries still run.
pub struct NameReporter<P> {
    provider: P,
}

impl<P: ComputerNameProvider> NameReporter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve `query` and write exactly one line: `label=value` to `out`,
    /// or the diagnostic to `err`.
    ///
    /// Only I/O errors on the streams themselves are returned.
    pub fn query_and_print<O, E>(&self, query: &NameQuery, out: &mut O, err: &mut E) -> io::Result<NameResult>
    where
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        let result = self.provider.resolve(query.selector);
        write_line(query, &result, out, err)?;
        Ok(result)
    }

    /// Print all eight names in their fixed order.
    pub fn report_all<O, E>(&self, out: &mut O, err: &mut E) -> io::Result<()>
    where
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        for query in &QUERIES {
            write_line(query, &self.provider.resolve(query.selector), out, err)?;
        }
        out.flush()
    }

    /// Resolve all eight names into a JSON object keyed by label.
    ///
    /// Failed queries still write their diagnostic line to `err`. In the
    /// plain form they map to `null`; with `verbose` every label maps to an
    /// object carrying the value, the selector's format number, whether it
    /// is a physical name and the error code.
    pub fn report_json<E>(&self, verbose: bool, err: &mut E) -> io::Result<JsonValue>
    where
        E: Write + ?Sized,
    {
        let mut names = Map::new();
        for query in &QUERIES {
            let result = self.provider.resolve(query.selector);
            if let Err(e) = &result {
                writeln!(err, "{e}")?;
            }
            let value = result
                .as_ref()
                .ok()
                .map(|value| value.to_string_lossy().into_owned());
            let entry = if verbose {
                json!({
                    "value": value,
                    "format": query.selector.format(),
                    "physical": query.selector.is_physical(),
                    "error": result.as_ref().err().map(|e| e.code),
                })
            } else {
                json!(value)
            };
            names.insert(query.label.to_string(), entry);
        }
        Ok(JsonValue::Object(names))
    }
}

/// One `label=value` line on `out`, or the diagnostic line on `err`.
fn write_line<O, E>(query: &NameQuery, result: &NameResult, out: &mut O, err: &mut E) -> io::Result<()>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match result {
        Ok(value) => {
            out.write_all(query.label.as_bytes())?;
            out.write_all(b"=")?;
            write_verbatim(out, value)?;
            out.write_all(b"\n")
        }
        Err(e) => writeln!(err, "{e}"),
    }
}
