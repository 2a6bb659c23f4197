// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Scan strategies and scan keys: the query side of the index.

use crate::error::{TrieError, TrieResult};
use crate::kmer::{Kmer, QKmer};

/// A comparison or search strategy a scan can request.
///
/// Grounded on the `BTLessStrategyNumber` .. `BTGreaterEqualStrategyNumber`,
/// `RTPrefixStrategyNumber`, and `RTContainsStrategyNumber` constants
/// `kmer_inner_consistent`/`kmer_leaf_consistent` switch over in
/// `kmer_spgist.c`, renamed to what they do rather than their Postgres
/// strategy numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
    Prefix,
    Contains,
}

/// The argument a [`Strategy`] is evaluated against.
///
/// `Contains` takes a [`QKmer`] (an ambiguous pattern); every other strategy
/// compares against a plain [`Kmer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanArgument {
    Kmer(Kmer),
    QKmer(QKmer),
}

/// A single strategy/argument pair to evaluate during a scan.
///
/// One `TrieIndex::scan` call may carry several `ScanKey`s (e.g. `Ge` and
/// `Le` together for a bounded range); all of them must be satisfied for a
/// leaf to be returned, matching the "AND of scan keys" convention a
/// multi-column SPGiST scan would use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanKey {
    pub strategy: Strategy,
    pub argument: ScanArgument,
}

impl ScanKey {
    /// Builds a scan key, checking that `Contains` pairs with a `QKmer` and
    /// every other strategy pairs with a `Kmer` — the mismatch the
    /// `TrieError::UnrecognizedStrategy` doc comment describes.
    pub fn new(strategy: Strategy, argument: ScanArgument) -> TrieResult<Self> {
        let ok = match (&strategy, &argument) {
            (Strategy::Contains, ScanArgument::QKmer(_)) => true,
            (Strategy::Contains, ScanArgument::Kmer(_)) => false,
            (_, ScanArgument::Kmer(_)) => true,
            (_, ScanArgument::QKmer(_)) => false,
        };
        if ok {
            Ok(Self { strategy, argument })
        } else {
            Err(TrieError::UnrecognizedStrategy {
                strategy: strategy.name(),
            })
        }
    }

    pub fn eq(kmer: Kmer) -> Self {
        Self {
            strategy: Strategy::Eq,
            argument: ScanArgument::Kmer(kmer),
        }
    }

    pub fn lt(kmer: Kmer) -> Self {
        Self {
            strategy: Strategy::Lt,
            argument: ScanArgument::Kmer(kmer),
        }
    }

    pub fn le(kmer: Kmer) -> Self {
        Self {
            strategy: Strategy::Le,
            argument: ScanArgument::Kmer(kmer),
        }
    }

    pub fn gt(kmer: Kmer) -> Self {
        Self {
            strategy: Strategy::Gt,
            argument: ScanArgument::Kmer(kmer),
        }
    }

    pub fn ge(kmer: Kmer) -> Self {
        Self {
            strategy: Strategy::Ge,
            argument: ScanArgument::Kmer(kmer),
        }
    }

    pub fn prefix(kmer: Kmer) -> Self {
        Self {
            strategy: Strategy::Prefix,
            argument: ScanArgument::Kmer(kmer),
        }
    }

    pub fn contains(pattern: QKmer) -> Self {
        Self {
            strategy: Strategy::Contains,
            argument: ScanArgument::QKmer(pattern),
        }
    }

    /// Evaluates this scan key against a fully reconstructed candidate k-mer.
    ///
    /// Grounded on `kmer_leaf_consistent`'s final strategy switch in
    /// `kmer_spgist.c`, which calls back into the scalar operators
    /// (`kmer_equals`, `kmer_starts_with`, `kmer_containing`, byte-wise `<`).
    pub fn accepts(&self, candidate: &Kmer) -> bool {
        match (&self.strategy, &self.argument) {
            (Strategy::Lt, ScanArgument::Kmer(k)) => candidate < k,
            (Strategy::Le, ScanArgument::Kmer(k)) => candidate <= k,
            (Strategy::Eq, ScanArgument::Kmer(k)) => candidate == k,
            (Strategy::Ge, ScanArgument::Kmer(k)) => candidate >= k,
            (Strategy::Gt, ScanArgument::Kmer(k)) => candidate > k,
            (Strategy::Prefix, ScanArgument::Kmer(k)) => candidate.starts_with(k),
            (Strategy::Contains, ScanArgument::QKmer(q)) => candidate.matches_pattern(q),
            _ => false,
        }
    }
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Lt => "lt",
            Strategy::Le => "le",
            Strategy::Eq => "eq",
            Strategy::Ge => "ge",
            Strategy::Gt => "gt",
            Strategy::Prefix => "prefix",
            Strategy::Contains => "contains",
        }
    }
}

#[cfg(test)]
#[path = "strategy_test.rs"]
mod strategy_test;
