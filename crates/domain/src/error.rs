// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while parsing domain values.
///
/// The rule calculators themselves never return errors: bad input to a
/// calculation yields a sentinel result instead. Parse failures are the
/// only hard errors the domain layer produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record status string was not recognized.
    InvalidStatus(String),
    /// A role string was not recognized.
    InvalidRole(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus(s) => write!(f, "Unknown record status: {s}"),
            Self::InvalidRole(s) => write!(f, "Unknown role: {s}"),
        }
    }
}

impl std::error::Error for DomainError {}
