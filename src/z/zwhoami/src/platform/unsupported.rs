// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::provider::{ComputerNameProvider, NameQueryError, NameResult};
use crate::selector::NameSelector;

/// `ERROR_NOT_SUPPORTED`
const NOT_SUPPORTED: u32 = 50;

/// Fails every query on targets without a computer-name facility.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNameProvider;

impl SystemNameProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ComputerNameProvider for SystemNameProvider {
    fn resolve(&self, selector: NameSelector) -> NameResult {
        Err(NameQueryError::new(selector, NOT_SUPPORTED))
    }
}
