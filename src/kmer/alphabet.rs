// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Shared alphabet validation for the DNA and IUPAC byte classes.

use crate::error::TrieError;

/// Maximum length, in bytes, of a `Kmer` or `QKmer`.
pub const MAX_KMER_LENGTH: usize = 32;

/// Lower-cases an ASCII letter without touching any other byte.
fn to_lower(byte: u8) -> u8 {
    byte.to_ascii_lowercase()
}

/// Validates and lower-cases a DNA sequence (the 4-letter alphabet).
///
/// ## Input
/// - `input`: raw bytes, any case
///
/// ## Output
/// - `Ok(Vec<u8>)`: lower-cased bytes, all within {a,c,g,t}
/// - `Err(TrieError::InvalidDnaByte)`: first offending byte and its position
pub fn validate_dna(input: &[u8]) -> Result<Vec<u8>, TrieError> {
    let mut out = Vec::with_capacity(input.len());
    for (position, &byte) in input.iter().enumerate() {
        let lower = to_lower(byte);
        if !matches!(lower, b'a' | b'c' | b'g' | b't') {
            return Err(TrieError::InvalidDnaByte {
                byte: lower,
                position,
            });
        }
        out.push(lower);
    }
    Ok(out)
}

/// Validates and lower-cases an IUPAC ambiguity-code sequence (15 letters).
///
/// ## Input
/// - `input`: raw bytes, any case
///
/// ## Output
/// - `Ok(Vec<u8>)`: lower-cased bytes, all within the IUPAC alphabet
/// - `Err(TrieError::InvalidIupacByte)`: first offending byte and its position
pub fn validate_iupac(input: &[u8]) -> Result<Vec<u8>, TrieError> {
    let mut out = Vec::with_capacity(input.len());
    for (position, &byte) in input.iter().enumerate() {
        let lower = to_lower(byte);
        if !matches!(
            lower,
            b'a' | b'c'
                | b'g'
                | b't'
                | b'u'
                | b'r'
                | b'y'
                | b'k'
                | b'm'
                | b's'
                | b'w'
                | b'b'
                | b'd'
                | b'h'
                | b'v'
                | b'n'
        ) {
            return Err(TrieError::InvalidIupacByte {
                byte: lower,
                position,
            });
        }
        out.push(lower);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "alphabet_test.rs"]
mod alphabet_test;
