//! Combination Matcher
//!
//! Walks the catalog in priority order and returns the first template that
//! admits some assignment of the input legs to its slots.
//!
//! Search per cardinality:
//! - Fixed: every ordering of the legs against the slots, seeded by input order.
//! - AtLeast: every leg against the single slot with relaxed type
//!   compatibility; no search.
//! - Multiple: every ordering, seeded by expiration (earliest first, ties by
//!   input order), cut into consecutive unit-sized groups that must each pass.

use serde::{Deserialize, Serialize};

use super::constraint_checker::{Assignment, check_all, fits_relaxed};
use super::permutation::next_permutation;
use crate::domain::combination::catalog::Catalog;
use crate::domain::combination::value_objects::{Cardinality, CombinationTemplate, LegTemplate};
use crate::domain::position::Leg;

/// Name reported when no template fits.
pub const UNCLASSIFIED: &str = "Unclassified";

/// Default ceiling on legs submitted to a permutation search.
pub const DEFAULT_MAX_PERMUTED_LEGS: usize = 8;

/// Outcome of classifying a set of legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Template name, or [`UNCLASSIFIED`].
    pub name: String,
    /// Template short name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Template identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// 1-based position assigned to each input leg; empty when unclassified.
    pub order: Vec<usize>,
}

impl Classification {
    /// The unclassified outcome.
    #[must_use]
    pub fn unclassified() -> Self {
        Self {
            name: UNCLASSIFIED.to_string(),
            short_name: None,
            identifier: None,
            order: Vec::new(),
        }
    }

    fn matched(template: &CombinationTemplate, order: Vec<usize>) -> Self {
        Self {
            name: template.name().to_string(),
            short_name: Some(template.short_name().to_string()),
            identifier: Some(template.identifier().to_string()),
            order,
        }
    }

    /// Check whether a template matched.
    #[must_use]
    pub fn is_classified(&self) -> bool {
        !self.order.is_empty()
    }
}

/// Classifies leg sets against a catalog.
///
/// The matcher never mutates its catalog, so one instance can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Catalog,
    max_permuted_legs: usize,
}

impl Matcher {
    /// Create a matcher with the default permutation ceiling.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            max_permuted_legs: DEFAULT_MAX_PERMUTED_LEGS,
        }
    }

    /// Set the largest leg count submitted to a permutation search.
    ///
    /// Fixed and multiple templates are skipped above it; at-least templates
    /// are still evaluated.
    #[must_use]
    pub const fn with_max_permuted_legs(mut self, max_permuted_legs: usize) -> Self {
        self.max_permuted_legs = max_permuted_legs;
        self
    }

    /// Get the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the permutation ceiling.
    #[must_use]
    pub const fn max_permuted_legs(&self) -> usize {
        self.max_permuted_legs
    }

    /// Classify a set of legs.
    ///
    /// Input order only identifies legs in the returned `order`; matching is
    /// order-independent. Empty input and no fitting template both yield
    /// [`Classification::unclassified`].
    #[must_use]
    pub fn classify(&self, legs: &[Leg]) -> Classification {
        if legs.is_empty() {
            return Classification::unclassified();
        }

        let permutable = legs.len() <= self.max_permuted_legs;
        if !permutable {
            tracing::warn!(
                legs = legs.len(),
                ceiling = self.max_permuted_legs,
                "Leg count exceeds permutation ceiling, skipping fixed and multiple templates"
            );
        }

        for template in &self.catalog {
            if !template.admits_count(legs.len()) {
                continue;
            }
            if template.cardinality().is_permuted() && !permutable {
                continue;
            }

            let order = match template.cardinality() {
                Cardinality::Fixed => fit_fixed(legs, template.legs()),
                Cardinality::AtLeast { .. } => fit_at_least(legs, template.legs()),
                Cardinality::Multiple => fit_multiple(legs, template.legs()),
            };

            if let Some(order) = order {
                tracing::debug!(
                    combination = template.name(),
                    legs = legs.len(),
                    "Position classified"
                );
                return Classification::matched(template, order);
            }
        }

        Classification::unclassified()
    }
}

fn fit_fixed(legs: &[Leg], slots: &[LegTemplate]) -> Option<Vec<usize>> {
    let seed: Vec<usize> = (0..legs.len()).collect();
    search(legs, slots, &seed)
}

fn fit_at_least(legs: &[Leg], slots: &[LegTemplate]) -> Option<Vec<usize>> {
    let slot = slots.first()?;
    legs.iter()
        .all(|leg| fits_relaxed(leg, slot))
        .then(|| (1..=legs.len()).collect())
}

fn fit_multiple(legs: &[Leg], slots: &[LegTemplate]) -> Option<Vec<usize>> {
    let mut seed: Vec<usize> = (0..legs.len()).collect();
    seed.sort_by_key(|&index| (legs[index].expiration(), index));
    search(legs, slots, &seed)
}

/// Try every arrangement of `seed` until each unit-sized group fits `slots`.
///
/// Permutations step over ranks into `seed`, so the first arrangement tried
/// is `seed` itself and all `n!` arrangements are reachable.
fn search(legs: &[Leg], slots: &[LegTemplate], seed: &[usize]) -> Option<Vec<usize>> {
    if slots.is_empty() || seed.len() % slots.len() != 0 {
        return None;
    }

    let mut ranks: Vec<usize> = (0..seed.len()).collect();
    let mut assignments: Vec<Assignment<'_>> = Vec::with_capacity(slots.len());

    loop {
        let fits = ranks.chunks(slots.len()).all(|group| {
            assignments.clear();
            assignments.extend(
                group
                    .iter()
                    .zip(slots)
                    .map(|(&rank, slot)| Assignment::new(&legs[seed[rank]], slot)),
            );
            check_all(&mut assignments)
        });

        if fits {
            let mut order = vec![0; seed.len()];
            for (position, &rank) in ranks.iter().enumerate() {
                order[seed[rank]] = position + 1;
            }
            return Some(order);
        }

        if !next_permutation(&mut ranks) {
            return None;
        }
    }
}
