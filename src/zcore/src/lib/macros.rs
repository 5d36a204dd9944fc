// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Macros for the zwhoami utilities.
//!
//! This module bundles all macros used across the utilities. These exported
//! macros are available at the crate root (`zcore::show_error!`, ...).

/// Display an error message prefixed with the utility name.
///
/// # Examples
///
/// ```
/// use zcore::show_error;
///
/// show_error!("Couldn't apply {} to {}", "foo", "bar");
/// ```
#[macro_export]
macro_rules! show_error(
    ($($args:tt)+) => ({
        eprint!("{}: ", $crate::util_name());
        eprintln!($($args)+);
    })
);

/// Print a warning message to stderr.
///
/// Takes [`format!`]-compatible input and prepends it with the current
/// utility's name and "warning: " before printing to stderr.
///
/// # Examples
///
/// ```
/// use zcore::show_warning;
///
/// show_warning!("Cannot load the {} resource", "en-US");
/// ```
#[macro_export]
macro_rules! show_warning(
    ($($args:tt)+) => ({
        eprint!("{}: warning: ", $crate::util_name());
        eprintln!($($args)+);
    })
);
