// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore netbios

use std::fmt;

/// Which form of the computer name to ask the operating system for.
///
/// The discriminants are the `COMPUTER_NAME_FORMAT` values understood by
/// `GetComputerNameExW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum NameSelector {
    NetBios = 0,
    DnsHostname = 1,
    DnsDomain = 2,
    DnsFullyQualified = 3,
    PhysicalNetBios = 4,
    PhysicalDnsHostname = 5,
    PhysicalDnsDomain = 6,
    PhysicalDnsFullyQualified = 7,
}

impl NameSelector {
    /// Numeric `COMPUTER_NAME_FORMAT` value of this selector.
    pub fn format(self) -> i32 {
        self as i32
    }

    /// Whether the selector ignores cluster and load-balancing virtual names.
    pub fn is_physical(self) -> bool {
        matches!(
            self,
            Self::PhysicalNetBios
                | Self::PhysicalDnsHostname
                | Self::PhysicalDnsDomain
                | Self::PhysicalDnsFullyQualified
        )
    }

    /// The selector answering the same question without the physical override.
    pub fn logical(self) -> Self {
        match self {
            Self::PhysicalNetBios => Self::NetBios,
            Self::PhysicalDnsHostname => Self::DnsHostname,
            Self::PhysicalDnsDomain => Self::DnsDomain,
            Self::PhysicalDnsFullyQualified => Self::DnsFullyQualified,
            other => other,
        }
    }

    /// Label printed in front of the value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NetBios => "ComputerNameNetBIOS",
            Self::DnsHostname => "ComputerNameDnsHostname",
            Self::DnsDomain => "ComputerNameDnsDomain",
            Self::DnsFullyQualified => "ComputerNameDnsFullyQualified",
            Self::PhysicalNetBios => "ComputerNamePhysicalNetBIOS",
            Self::PhysicalDnsHostname => "ComputerNamePhysicalDnsHostname",
            Self::PhysicalDnsDomain => "ComputerNamePhysicalDnsDomain",
            Self::PhysicalDnsFullyQualified => "ComputerNamePhysicalDnsFullyQualified",
        }
    }
}

impl fmt::Display for NameSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the report: what to ask for and how to label the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameQuery {
    pub selector: NameSelector,
    pub label: &'static str,
}

impl NameQuery {
    const fn of(selector: NameSelector) -> Self {
        Self {
            selector,
            label: selector.label(),
        }
    }
}

/// Every query of the report, in output order.
pub const QUERIES: [NameQuery; 8] = [
    NameQuery::of(NameSelector::NetBios),
    NameQuery::of(NameSelector::DnsHostname),
    NameQuery::of(NameSelector::DnsDomain),
    NameQuery::of(NameSelector::DnsFullyQualified),
    NameQuery::of(NameSelector::PhysicalNetBios),
    NameQuery::of(NameSelector::PhysicalDnsHostname),
    NameQuery::of(NameSelector::PhysicalDnsDomain),
    NameQuery::of(NameSelector::PhysicalDnsFullyQualified),
];
