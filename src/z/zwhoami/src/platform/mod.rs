// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use self::unix::SystemNameProvider;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use self::windows::SystemNameProvider;

#[cfg(not(any(unix, windows)))]
mod unsupported;
#[cfg(not(any(unix, windows)))]
pub use self::unsupported::SystemNameProvider;
