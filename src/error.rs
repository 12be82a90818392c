// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error type returned from [`UniformFast::try_new`] and
/// [`Param::try_new`].
///
/// [`UniformFast::try_new`]: crate::UniformFast::try_new
/// [`Param::try_new`]: crate::Param::try_new
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `low > high`
    EmptyRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::EmptyRange => "low > high in bounded uniform distribution",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
