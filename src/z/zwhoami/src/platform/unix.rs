// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore canonname netbios

//! Unix has no `GetComputerNameExW`; the names are derived from
//! `gethostname(2)` and the resolver's canonical name for the host.
//! There is no cluster virtual name either, so the physical selectors
//! answer exactly like their logical counterparts.

use std::ffi::OsString;
use std::io;

use dns_lookup::{AddrInfoHints, getaddrinfo};

use crate::provider::{ComputerNameProvider, NameQueryError, NameResult};
use crate::selector::NameSelector;

/// Longest NetBIOS computer name (`MAX_COMPUTERNAME_LENGTH`).
const NETBIOS_NAME_MAX: usize = 15;

/// Derives the Windows-style names from the host name and resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNameProvider;

impl SystemNameProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ComputerNameProvider for SystemNameProvider {
    fn resolve(&self, selector: NameSelector) -> NameResult {
        let host = hostname::get().map_err(|e| NameQueryError::new(selector, os_code(&e)))?;
        let host = host.to_string_lossy();

        let value = match selector {
            NameSelector::NetBios | NameSelector::PhysicalNetBios => {
                netbios_name(split_fqdn(&host).0)
            }
            NameSelector::DnsHostname | NameSelector::PhysicalDnsHostname => {
                split_fqdn(&host).0.to_string()
            }
            NameSelector::DnsDomain | NameSelector::PhysicalDnsDomain => {
                split_fqdn(&fully_qualified(&host)).1.to_string()
            }
            NameSelector::DnsFullyQualified | NameSelector::PhysicalDnsFullyQualified => {
                fully_qualified(&host)
            }
        };
        Ok(OsString::from(value))
    }
}

fn os_code(err: &io::Error) -> i32 {
    err.raw_os_error().unwrap_or(libc::EIO)
}

/// The host name if it is already qualified, otherwise the resolver's
/// canonical name for it, otherwise the bare host name.
fn fully_qualified(host: &str) -> String {
    if host.contains('.') {
        return host.to_string();
    }
    canonical_name(host)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| host.to_string())
}

fn canonical_name(host: &str) -> Option<String> {
    let hints = AddrInfoHints {
        flags: libc::AI_CANONNAME,
        ..AddrInfoHints::default()
    };
    getaddrinfo(Some(host), None, Some(hints))
        .ok()?
        .filter_map(Result::ok)
        .find_map(|info| info.canonname)
}

/// Splits a DNS name at its first dot into host and domain.
fn split_fqdn(fqdn: &str) -> (&str, &str) {
    fqdn.split_once('.').unwrap_or((fqdn, ""))
}

/// NetBIOS names are upper case and at most 15 characters long.
fn netbios_name(host: &str) -> String {
    host.chars()
        .take(NETBIOS_NAME_MAX)
        .collect::<String>()
        .to_uppercase()
}
