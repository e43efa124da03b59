//! Constraint checks for a candidate leg-to-slot assignment.
//!
//! The combined check over a full assignment requires, in order:
//! 1. every leg has exactly its slot's type and a ratio the slot admits;
//! 2. option strikes follow the slots' strike tie-groups;
//! 3. expirations follow the slots' expiration tie-groups and calendar deltas.
//!
//! The strike and expiration walks reorder the assignment slice in place.
//! Callers pass a per-search scratch slice.

use std::cmp::Ordering;

use crate::domain::combination::value_objects::{ExpirationSpec, LegTemplate, TieGroup};
use crate::domain::position::{InstrumentType, Leg};

/// A leg paired with the template slot it is tried against.
#[derive(Debug, Clone, Copy)]
pub struct Assignment<'a> {
    /// The input leg.
    pub leg: &'a Leg,
    /// The template slot.
    pub slot: &'a LegTemplate,
}

impl<'a> Assignment<'a> {
    /// Pair a leg with a slot.
    #[must_use]
    pub const fn new(leg: &'a Leg, slot: &'a LegTemplate) -> Self {
        Self { leg, slot }
    }
}

/// Exact type compatibility, used by fixed and multiple templates.
#[must_use]
pub fn types_match_exact(leg: InstrumentType, slot: InstrumentType) -> bool {
    leg == slot
}

/// Relaxed type compatibility: any two option-family types are interchangeable.
#[must_use]
pub fn types_match_relaxed(leg: InstrumentType, slot: InstrumentType) -> bool {
    leg == slot || (leg.is_option() && slot.is_option())
}

/// Check one leg against one slot with exact type compatibility.
#[must_use]
pub fn fits_exact(leg: &Leg, slot: &LegTemplate) -> bool {
    types_match_exact(leg.instrument_type(), slot.instrument_type) && slot.ratio.admits(leg.ratio())
}

/// Check one leg against one slot with relaxed type compatibility.
#[must_use]
pub fn fits_relaxed(leg: &Leg, slot: &LegTemplate) -> bool {
    types_match_relaxed(leg.instrument_type(), slot.instrument_type)
        && slot.ratio.admits(leg.ratio())
}

/// Every leg matches its slot's type exactly and satisfies its ratio.
#[must_use]
pub fn check_type_and_ratio(assignments: &[Assignment<'_>]) -> bool {
    assignments.iter().all(|a| fits_exact(a.leg, a.slot))
}

/// Option strikes respect the slots' strike tie-groups.
///
/// Slots are walked in tie-group order. Non-option slots and slots without
/// a strike constraint are skipped. Consecutive considered slots with equal
/// tie-groups need equal strikes; otherwise the earlier strike must be
/// strictly lower.
pub fn check_strike_order(assignments: &mut [Assignment<'_>]) -> bool {
    assignments.sort_by_key(|a| a.slot.strike.tie_group().map(TieGroup::sort_key));

    let mut previous = None;
    for assignment in assignments.iter() {
        if !assignment.slot.instrument_type.is_option() {
            continue;
        }
        let Some(group) = assignment.slot.strike.tie_group() else {
            continue;
        };
        let strike = assignment.leg.strike();

        if let Some((previous_group, previous_strike)) = previous {
            let ordered = match TieGroup::compare(previous_group, group) {
                Ordering::Equal => previous_strike == strike,
                Ordering::Less | Ordering::Greater => previous_strike < strike,
            };
            if !ordered {
                return false;
            }
        }
        previous = Some((group, strike));
    }
    true
}

/// Expirations respect the slots' expiration tie-groups and calendar deltas.
///
/// Slots are walked in tie-group order; slots without an expiration
/// constraint are skipped. The first considered slot is the reference. A
/// delta slot must sit exactly its delta from the reference date. Any other
/// slot needs the same date as its predecessor when their tie-groups are
/// equal and a strictly later date otherwise.
pub fn check_expiration_order(assignments: &mut [Assignment<'_>]) -> bool {
    assignments.sort_by_key(|a| a.slot.expiration.tie_group().map(TieGroup::sort_key));

    let mut constrained = assignments.iter().filter_map(|a| {
        a.slot
            .expiration
            .tie_group()
            .map(|group| (group, a.slot.expiration, a.leg.expiration()))
    });

    let Some((mut previous_group, _, reference)) = constrained.next() else {
        return true;
    };
    let mut previous_date = reference;

    for (group, spec, date) in constrained {
        let ordered = match spec {
            ExpirationSpec::Delta(delta) => delta.spans(reference, date),
            _ => match TieGroup::compare(previous_group, group) {
                Ordering::Equal => previous_date == date,
                Ordering::Less | Ordering::Greater => previous_date < date,
            },
        };
        if !ordered {
            return false;
        }
        previous_group = group;
        previous_date = date;
    }
    true
}

/// Combined check over a full assignment.
pub fn check_all(assignments: &mut [Assignment<'_>]) -> bool {
    check_type_and_ratio(assignments)
        && check_strike_order(assignments)
        && check_expiration_order(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::combination::value_objects::{
        CalendarDelta, CalendarUnit, RatioSign, RatioSpec, StrikeSpec,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn jan() -> NaiveDate {
        date(2024, 1, 19)
    }

    fn call(ratio: Decimal, strike: Decimal, expiration: NaiveDate) -> Leg {
        Leg::call(ratio, strike, expiration)
    }

    fn slot(instrument_type: InstrumentType) -> LegTemplate {
        LegTemplate::new(instrument_type)
    }

    fn check(legs: &[Leg], slots: &[LegTemplate]) -> bool {
        let mut assignments: Vec<_> = legs
            .iter()
            .zip(slots)
            .map(|(leg, slot)| Assignment::new(leg, slot))
            .collect();
        check_all(&mut assignments)
    }

    #[test]
    fn relaxed_types_accept_option_family() {
        assert!(types_match_relaxed(InstrumentType::Put, InstrumentType::Call));
        assert!(types_match_relaxed(InstrumentType::OtherOption, InstrumentType::Put));
        assert!(types_match_relaxed(InstrumentType::Future, InstrumentType::Future));
        assert!(!types_match_relaxed(InstrumentType::Future, InstrumentType::Call));
        assert!(!types_match_relaxed(InstrumentType::Call, InstrumentType::Underlying));
    }

    #[test]
    fn exact_types_reject_option_family_mix() {
        assert!(types_match_exact(InstrumentType::Call, InstrumentType::Call));
        assert!(!types_match_exact(InstrumentType::Put, InstrumentType::Call));
    }

    #[test]
    fn type_and_ratio_check() {
        let legs = [call(dec!(1), dec!(100), jan())];
        let positive = [slot(InstrumentType::Call).with_ratio(RatioSpec::Sign(RatioSign::PositiveOnly))];
        let negative = [slot(InstrumentType::Call).with_ratio(RatioSpec::Sign(RatioSign::NegativeOnly))];
        let put = [slot(InstrumentType::Put)];
        let exact = [slot(InstrumentType::Call).with_ratio(RatioSpec::Exact(dec!(2)))];

        assert!(check(&legs, &positive));
        assert!(!check(&legs, &negative));
        assert!(!check(&legs, &put));
        assert!(!check(&legs, &exact));
    }

    #[test]
    fn shared_strike_label_requires_equal_strikes() {
        let slots = [
            slot(InstrumentType::Call).with_strike(StrikeSpec::Label('a')),
            slot(InstrumentType::Call).with_strike(StrikeSpec::Label('a')),
        ];

        assert!(check(
            &[call(dec!(1), dec!(100), jan()), call(dec!(-1), dec!(100), jan())],
            &slots
        ));
        assert!(!check(
            &[call(dec!(1), dec!(100), jan()), call(dec!(-1), dec!(105), jan())],
            &slots
        ));
    }

    #[test]
    fn distinct_strike_labels_require_strict_ascent() {
        let slots = [
            slot(InstrumentType::Call).with_strike(StrikeSpec::Label('a')),
            slot(InstrumentType::Call).with_strike(StrikeSpec::Label('b')),
        ];

        assert!(check(
            &[call(dec!(1), dec!(100), jan()), call(dec!(-1), dec!(105), jan())],
            &slots
        ));
        assert!(!check(
            &[call(dec!(1), dec!(100), jan()), call(dec!(-1), dec!(100), jan())],
            &slots
        ));
        assert!(!check(
            &[call(dec!(1), dec!(105), jan()), call(dec!(-1), dec!(100), jan())],
            &slots
        ));
    }

    #[test]
    fn strike_walk_follows_offsets_not_slot_order() {
        // Slots listed high, low, middle.
        let slots = [
            slot(InstrumentType::Call).with_strike(StrikeSpec::Offset(2)),
            slot(InstrumentType::Call).with_strike(StrikeSpec::Offset(-1)),
            slot(InstrumentType::Call).with_strike(StrikeSpec::Offset(1)),
        ];
        let legs = [
            call(dec!(1), dec!(110), jan()),
            call(dec!(1), dec!(90), jan()),
            call(dec!(-2), dec!(100), jan()),
        ];
        assert!(check(&legs, &slots));

        let swapped = [
            call(dec!(1), dec!(100), jan()),
            call(dec!(1), dec!(90), jan()),
            call(dec!(-2), dec!(110), jan()),
        ];
        assert!(!check(&swapped, &slots));
    }

    #[test]
    fn strike_walk_skips_non_option_and_unset_slots() {
        let stock = Leg::new(InstrumentType::Underlying, dec!(100), dec!(500), jan());
        let slots = [
            slot(InstrumentType::Call).with_strike(StrikeSpec::Label('a')),
            slot(InstrumentType::Underlying).with_strike(StrikeSpec::Label('a')),
            slot(InstrumentType::Call),
        ];
        let legs = [
            call(dec!(-1), dec!(150), jan()),
            stock,
            call(dec!(1), dec!(10), jan()),
        ];
        assert!(check(&legs, &slots));
    }

    #[test]
    fn mixed_label_and_offset_compare_as_zero() {
        // Label sits at 0, between offsets -1 and +1.
        let slots = [
            slot(InstrumentType::Put).with_strike(StrikeSpec::Offset(-1)),
            slot(InstrumentType::Put).with_strike(StrikeSpec::Label('a')),
            slot(InstrumentType::Put).with_strike(StrikeSpec::Offset(1)),
        ];
        let put = |strike| Leg::put(dec!(1), strike, jan());

        assert!(check(&[put(dec!(90)), put(dec!(95)), put(dec!(99))], &slots));
        assert!(!check(&[put(dec!(96)), put(dec!(95)), put(dec!(99))], &slots));
    }

    #[test]
    fn shared_expiration_label_requires_equal_dates() {
        let slots = [
            slot(InstrumentType::Call).with_expiration(ExpirationSpec::Label('a')),
            slot(InstrumentType::Call).with_expiration(ExpirationSpec::Label('a')),
        ];

        assert!(check(
            &[call(dec!(1), dec!(100), jan()), call(dec!(1), dec!(110), jan())],
            &slots
        ));
        assert!(!check(
            &[
                call(dec!(1), dec!(100), jan()),
                call(dec!(1), dec!(110), date(2024, 1, 26))
            ],
            &slots
        ));
    }

    #[test]
    fn distinct_expiration_labels_require_later_date() {
        let slots = [
            slot(InstrumentType::Call).with_expiration(ExpirationSpec::Label('b')),
            slot(InstrumentType::Call).with_expiration(ExpirationSpec::Label('a')),
        ];
        let near = call(dec!(-1), dec!(100), jan());
        let far = call(dec!(1), dec!(100), date(2024, 2, 16));

        assert!(check(&[far.clone(), near.clone()], &slots));
        assert!(!check(&[near.clone(), far], &slots));
        assert!(!check(&[near.clone(), near], &slots));
    }

    #[test]
    fn month_delta_against_reference() {
        let slots = [
            slot(InstrumentType::Call).with_expiration(ExpirationSpec::Label('a')),
            slot(InstrumentType::Call)
                .with_expiration(ExpirationSpec::Delta(CalendarDelta::new(1, CalendarUnit::Month))),
        ];
        let reference = call(dec!(-1), dec!(100), date(2024, 1, 15));

        assert!(check(
            &[reference.clone(), call(dec!(1), dec!(100), date(2024, 2, 10))],
            &slots
        ));
        assert!(!check(
            &[reference, call(dec!(1), dec!(100), date(2024, 3, 10))],
            &slots
        ));
    }

    #[test]
    fn deltas_measure_from_reference_not_predecessor() {
        let slots = [
            slot(InstrumentType::Future).with_expiration(ExpirationSpec::Label('a')),
            slot(InstrumentType::Future)
                .with_expiration(ExpirationSpec::Delta(CalendarDelta::new(1, CalendarUnit::Quarter))),
            slot(InstrumentType::Future)
                .with_expiration(ExpirationSpec::Delta(CalendarDelta::new(2, CalendarUnit::Quarter))),
        ];
        let future = |d| Leg::new(InstrumentType::Future, dec!(1), Decimal::ZERO, d);

        assert!(check(
            &[
                future(date(2024, 3, 15)),
                future(date(2024, 6, 21)),
                future(date(2024, 9, 20))
            ],
            &slots
        ));
        assert!(!check(
            &[
                future(date(2024, 3, 15)),
                future(date(2024, 6, 21)),
                future(date(2024, 12, 20))
            ],
            &slots
        ));
    }

    #[test]
    fn unset_expirations_are_ignored() {
        let stock = Leg::new(InstrumentType::Underlying, dec!(100), dec!(0), date(1999, 1, 1));
        let slots = [
            slot(InstrumentType::Underlying),
            slot(InstrumentType::Call).with_expiration(ExpirationSpec::Label('a')),
        ];
        assert!(check(&[stock, call(dec!(-1), dec!(100), jan())], &slots));
    }

    #[test]
    fn empty_assignment_passes() {
        assert!(check(&[], &[]));
    }
}
