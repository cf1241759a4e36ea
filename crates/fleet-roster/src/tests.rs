//! Unit tests for fleet-roster.

use fleet_core::{DriverId, DutyDay};

use crate::{Delegation, DelegationBook, DutyRoster, ShiftCode};

// ── Helpers ───────────────────────────────────────────────────────────────────

use ShiftCode::{Am, G1, G2, G3, Pm};

fn roster_for_day(day: DutyDay, slots: &[(ShiftCode, u32)]) -> DutyRoster {
    let mut roster = DutyRoster::new();
    for &(shift, driver) in slots {
        roster.insert(day, shift, DriverId(driver)).expect("staff slot");
    }
    roster
}

fn delegation(principal: u32, agent: u32, first: i32, last: i32, absent: bool) -> Delegation {
    Delegation {
        principal: DriverId(principal),
        agent:     DriverId(agent),
        first_day: DutyDay(first),
        last_day:  DutyDay(last),
        absent,
    }
}

// ── Chain construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod chain {
    use super::*;
    use crate::shift::{DayPart, shift_chain};
    use fleet_core::{DispatchConfig, TimePoint};

    #[test]
    fn long_trip_prefers_g3_then_g2() {
        assert_eq!(shift_chain(DayPart::Early, true), vec![G3, G2, Am, Pm, G1]);
        assert_eq!(shift_chain(DayPart::Afternoon, true), vec![G3, G2, Pm, Am, G1]);
        assert_eq!(shift_chain(DayPart::Other, true), vec![G3, G2, Am, Pm, G1]);
    }

    #[test]
    fn short_trip_prefers_day_part_slots() {
        assert_eq!(shift_chain(DayPart::Early, false), vec![Am, G1, G3, Pm, G2]);
        assert_eq!(shift_chain(DayPart::Afternoon, false), vec![Pm, G2, G3, Am, G1]);
        assert_eq!(shift_chain(DayPart::Other, false), vec![Am, Pm, G1, G2, G3]);
    }

    #[test]
    fn every_chain_is_exhaustive_and_duplicate_free() {
        for part in [DayPart::Early, DayPart::Afternoon, DayPart::Other] {
            for long in [false, true] {
                let chain = shift_chain(part, long);
                assert_eq!(chain.len(), 5, "{part:?}/{long}");
                for code in crate::shift::ALL_SHIFTS {
                    assert!(chain.contains(&code), "{part:?}/{long} missing {code}");
                }
            }
        }
    }

    #[test]
    fn day_part_boundaries() {
        let cfg = DispatchConfig::default();
        let classify = |h, m| DayPart::classify(TimePoint::from_day_hm(0, h, m), &cfg);

        assert_eq!(classify(0, 0), DayPart::Early);
        assert_eq!(classify(11, 29), DayPart::Early);
        // 11:30 exactly is no longer early.
        assert_eq!(classify(11, 30), DayPart::Other);
        assert_eq!(classify(13, 29), DayPart::Other);
        assert_eq!(classify(13, 30), DayPart::Afternoon);
        assert_eq!(classify(16, 59), DayPart::Afternoon);
        // Afternoon band is half-open.
        assert_eq!(classify(17, 0), DayPart::Other);
        assert_eq!(classify(23, 59), DayPart::Other);
    }

    #[test]
    fn shift_code_spelling_round_trip() {
        for code in crate::shift::ALL_SHIFTS {
            assert_eq!(ShiftCode::from_code(code.as_str()), Some(code));
        }
        assert_eq!(ShiftCode::from_code("XX"), None);
        assert_eq!(ShiftCode::from_code("am"), None);
    }
}

// ── DutyRoster ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod roster {
    use super::*;
    use crate::RosterError;

    #[test]
    fn staffed_and_unstaffed_slots() {
        let roster = roster_for_day(DutyDay(5), &[(Am, 1), (Pm, 2)]);
        assert_eq!(roster.on_duty(DutyDay(5), Am), Some(DriverId(1)));
        assert_eq!(roster.on_duty(DutyDay(5), G3), None);
        assert_eq!(roster.on_duty(DutyDay(6), Am), None);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn duplicate_slot_is_an_error() {
        let mut roster = roster_for_day(DutyDay(0), &[(Am, 1)]);
        let err = roster.insert(DutyDay(0), Am, DriverId(9)).unwrap_err();
        match err {
            RosterError::DuplicateSlot { existing, .. } => assert_eq!(existing, DriverId(1)),
            other => panic!("unexpected error: {other}"),
        }
        // The original entry is untouched.
        assert_eq!(roster.on_duty(DutyDay(0), Am), Some(DriverId(1)));
    }

    #[test]
    fn same_driver_may_hold_two_slots() {
        let roster = roster_for_day(DutyDay(0), &[(Am, 1), (G1, 1)]);
        assert_eq!(roster.on_duty(DutyDay(0), Am), Some(DriverId(1)));
        assert_eq!(roster.on_duty(DutyDay(0), G1), Some(DriverId(1)));
    }
}

// ── Delegations ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod delegations {
    use super::*;
    use crate::RosterError;

    #[test]
    fn date_range_is_inclusive() {
        let row = delegation(1, 2, 3, 5, true);
        assert!(!row.substitutes_on(DutyDay(2)));
        assert!(row.substitutes_on(DutyDay(3)));
        assert!(row.substitutes_on(DutyDay(5)));
        assert!(!row.substitutes_on(DutyDay(6)));
    }

    #[test]
    fn present_principal_means_no_substitution() {
        let row = delegation(1, 2, 0, 9, false);
        assert!(row.covers(DutyDay(4)));
        assert!(!row.substitutes_on(DutyDay(4)));
    }

    #[test]
    fn substitution_map_for_day() {
        let book = DelegationBook::from_rows(vec![
            delegation(1, 2, 0, 4, true),
            delegation(3, 4, 2, 2, true),
            delegation(5, 6, 0, 9, false), // inert
        ]);
        let map = book.substitutions_for(DutyDay(2)).unwrap();
        assert_eq!(map.get(&DriverId(1)), Some(&DriverId(2)));
        assert_eq!(map.get(&DriverId(3)), Some(&DriverId(4)));
        assert_eq!(map.get(&DriverId(5)), None);

        let map = book.substitutions_for(DutyDay(5)).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn two_active_rows_for_one_principal_is_an_error() {
        let book = DelegationBook::from_rows(vec![
            delegation(1, 2, 0, 4, true),
            delegation(1, 3, 3, 6, true),
        ]);
        // Days where only one row is active resolve fine.
        assert!(book.substitutions_for(DutyDay(1)).is_ok());
        assert!(book.substitutions_for(DutyDay(6)).is_ok());
        // The overlap days refuse.
        match book.substitutions_for(DutyDay(3)).unwrap_err() {
            RosterError::ConflictingDelegations { principal, day } => {
                assert_eq!(principal, DriverId(1));
                assert_eq!(day, DutyDay(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use super::*;
    use crate::{Candidate, resolve_chain, resolve_shift};

    #[test]
    fn plain_resolution_without_delegations() {
        let day = DutyDay(0);
        let roster = roster_for_day(day, &[(Am, 1), (Pm, 2)]);
        let subs = Default::default();

        let r = resolve_shift(&roster, &subs, day, Am).unwrap();
        assert_eq!(r.driver, DriverId(1));
        assert!(!r.substituted);
        assert!(resolve_shift(&roster, &subs, day, G3).is_none());
    }

    #[test]
    fn absent_principal_resolves_to_agent() {
        let day = DutyDay(1);
        let roster = roster_for_day(day, &[(Am, 1), (Pm, 2)]);
        let book = DelegationBook::from_rows(vec![delegation(1, 9, 0, 2, true)]);

        let candidates = resolve_chain(&roster, &book, day, &[Am, Pm]).unwrap();
        assert_eq!(
            candidates,
            vec![
                Candidate { shift: Am, driver: DriverId(9), substituted: true },
                Candidate { shift: Pm, driver: DriverId(2), substituted: false },
            ]
        );
    }

    #[test]
    fn unstaffed_shifts_are_skipped() {
        let day = DutyDay(0);
        let roster = roster_for_day(day, &[(G2, 7)]);
        let book = DelegationBook::new();

        let candidates = resolve_chain(&roster, &book, day, &[G3, G2, Am]).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].shift, G2);
        assert_eq!(candidates[0].driver, DriverId(7));
    }

    #[test]
    fn agent_covering_two_shifts_appears_once() {
        // Driver 9 substitutes for both rostered principals; only the first
        // chain position survives.
        let day = DutyDay(0);
        let roster = roster_for_day(day, &[(Am, 1), (Pm, 2), (G1, 3)]);
        let book = DelegationBook::from_rows(vec![
            delegation(1, 9, 0, 0, true),
            delegation(2, 9, 0, 0, true),
        ]);

        let candidates = resolve_chain(&roster, &book, day, &[Am, Pm, G1]).unwrap();
        assert_eq!(
            candidates,
            vec![
                Candidate { shift: Am, driver: DriverId(9), substituted: true },
                Candidate { shift: G1, driver: DriverId(3), substituted: false },
            ]
        );
    }

    #[test]
    fn conflicting_delegations_propagate() {
        let day = DutyDay(0);
        let roster = roster_for_day(day, &[(Am, 1)]);
        let book = DelegationBook::from_rows(vec![
            delegation(1, 2, 0, 0, true),
            delegation(1, 3, 0, 0, true),
        ]);
        assert!(resolve_chain(&roster, &book, day, &[Am]).is_err());
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{RosterError, load_delegations_reader, load_roster_reader};

    #[test]
    fn roster_round_trip() {
        let csv = "day,shift,driver_id\n0,AM,11\n0,PM,12\n1,G3,13\n";
        let roster = load_roster_reader(Cursor::new(csv)).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.on_duty(DutyDay(0), Am), Some(DriverId(11)));
        assert_eq!(roster.on_duty(DutyDay(1), G3), Some(DriverId(13)));
    }

    #[test]
    fn unknown_shift_code_rejected() {
        let csv = "day,shift,driver_id\n0,XX,11\n";
        match load_roster_reader(Cursor::new(csv)).unwrap_err() {
            RosterError::Parse(msg) => assert!(msg.contains("XX"), "got: {msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_slot_rejected_at_load() {
        let csv = "day,shift,driver_id\n0,AM,11\n0,AM,12\n";
        assert!(matches!(
            load_roster_reader(Cursor::new(csv)).unwrap_err(),
            RosterError::DuplicateSlot { .. }
        ));
    }

    #[test]
    fn delegations_round_trip() {
        let csv = "principal_id,agent_id,first_day,last_day,absent\n11,21,0,4,true\n12,22,2,2,false\n";
        let book = load_delegations_reader(Cursor::new(csv)).unwrap();
        assert_eq!(book.rows().len(), 2);
        assert!(book.rows()[0].substitutes_on(DutyDay(4)));
        assert!(!book.rows()[1].substitutes_on(DutyDay(2)));
    }

    #[test]
    fn reversed_delegation_range_rejected() {
        let csv = "principal_id,agent_id,first_day,last_day,absent\n11,21,5,2,true\n";
        assert!(matches!(
            load_delegations_reader(Cursor::new(csv)).unwrap_err(),
            RosterError::Parse(_)
        ));
    }
}
