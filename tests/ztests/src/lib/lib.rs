// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Helpers for running the built binary from integration tests.

pub mod util;

/// Derive the utility name from the calling test module, e.g.
/// `tests::test_zwhoami` yields `zwhoami`.
#[macro_export]
macro_rules! util_name {
    () => {
        module_path!()
            .split("_")
            .nth(1)
            .and_then(|s| s.split("::").next())
            .expect("no test name")
    };
}

/// A [`UCommand`](util::UCommand) for the utility under test.
#[macro_export]
macro_rules! new_ucmd {
    () => {
        $crate::util::TestScenario::new($crate::util_name!()).ucmd()
    };
}
