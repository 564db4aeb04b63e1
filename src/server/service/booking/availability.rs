//! Room availability over a fixed inventory of homogeneous rooms.
//!
//! The engine is a pure function of a reservation snapshot: callers load the
//! occupancies, ask a question, and persist whatever they decide. Stays are half-open
//! intervals `[check_in, check_out)`, so a guest checking out on a day never blocks a
//! guest checking in on that same day.

use chrono::{Duration, NaiveDate};
use std::collections::{BTreeSet, HashSet};

use crate::server::model::booking::RoomOccupancy;

/// `[a_start, a_end)` and `[b_start, b_end)` share at least one night.
pub fn overlaps(a_start: NaiveDate, a_end: NaiveDate, b_start: NaiveDate, b_end: NaiveDate) -> bool {
    a_start < b_end && b_start < a_end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityEngine {
    room_count: i32,
}

impl AvailabilityEngine {
    /// Creates an engine for rooms numbered `1..=room_count`.
    pub fn new(room_count: i32) -> Self {
        Self { room_count }
    }

    pub fn room_count(&self) -> i32 {
        self.room_count
    }

    pub fn contains_room(&self, room: i32) -> bool {
        (1..=self.room_count).contains(&room)
    }

    /// Rooms held by any reservation overlapping the stay, optionally ignoring one booking.
    fn occupied_rooms(
        &self,
        reservations: &[RoomOccupancy],
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_id: Option<i32>,
    ) -> HashSet<i32> {
        reservations
            .iter()
            .filter(|r| Some(r.booking_id) != exclude_id)
            .filter(|r| overlaps(r.check_in, r.check_out, check_in, check_out))
            .map(|r| r.room_number)
            .collect()
    }

    /// Returns the lowest numbered room free for the whole stay.
    ///
    /// `exclude_id` removes a booking from the snapshot so an existing booking can be
    /// moved without conflicting with itself.
    pub fn find_available_room(
        &self,
        reservations: &[RoomOccupancy],
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_id: Option<i32>,
    ) -> Option<i32> {
        let occupied = self.occupied_rooms(reservations, check_in, check_out, exclude_id);

        (1..=self.room_count).find(|room| !occupied.contains(room))
    }

    /// Every free room for the stay, ascending.
    pub fn list_available_rooms(
        &self,
        reservations: &[RoomOccupancy],
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Vec<i32> {
        let occupied = self.occupied_rooms(reservations, check_in, check_out, None);

        (1..=self.room_count)
            .filter(|room| !occupied.contains(room))
            .collect()
    }

    pub fn is_room_free(
        &self,
        reservations: &[RoomOccupancy],
        room: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> bool {
        !reservations
            .iter()
            .filter(|r| r.room_number == room)
            .any(|r| overlaps(r.check_in, r.check_out, check_in, check_out))
    }

    /// Check-in dates on which a stay of `duration` days cannot be placed in any room.
    ///
    /// Only dates inside an existing reservation are considered. A date is reported
    /// when the number of distinct rooms overlapping `[date, date + duration)` reaches
    /// the room count.
    pub fn list_unavailable_dates(
        &self,
        reservations: &[RoomOccupancy],
        duration: i32,
    ) -> BTreeSet<NaiveDate> {
        let candidates: BTreeSet<NaiveDate> = reservations
            .iter()
            .flat_map(|r| {
                r.check_in
                    .iter_days()
                    .take_while(move |day| *day < r.check_out)
            })
            .collect();

        candidates
            .into_iter()
            .filter(|date| {
                let Some(stay_end) = date.checked_add_signed(Duration::days(duration as i64))
                else {
                    return false;
                };
                let occupied = self.occupied_rooms(reservations, *date, stay_end, None);
                occupied.len() as i32 >= self.room_count
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stay(booking_id: i32, room_number: i32, check_in: NaiveDate, nights: i64) -> RoomOccupancy {
        RoomOccupancy {
            booking_id,
            room_number,
            check_in,
            check_out: check_in + Duration::days(nights),
        }
    }

    #[test]
    fn overlap_is_half_open() {
        let a = date(2024, 1, 1);
        let b = date(2024, 1, 8);
        assert!(overlaps(a, b, date(2024, 1, 7), date(2024, 1, 9)));
        assert!(!overlaps(a, b, b, date(2024, 1, 10)));
        assert!(!overlaps(a, b, date(2023, 12, 25), a));
    }

    #[test]
    fn empty_snapshot_returns_first_room() {
        let engine = AvailabilityEngine::new(12);
        let room = engine.find_available_room(&[], date(2024, 3, 1), date(2024, 3, 8), None);
        assert_eq!(room, Some(1));
    }

    #[test]
    fn returns_lowest_unused_room() {
        let engine = AvailabilityEngine::new(12);
        let check_in = date(2024, 3, 1);
        let taken = [1, 2, 3, 5, 8, 9, 10, 11, 12, 6, 7];
        let reservations: Vec<_> = taken
            .iter()
            .enumerate()
            .map(|(i, room)| stay(i as i32 + 1, *room, check_in, 7))
            .collect();

        let room =
            engine.find_available_room(&reservations, check_in, check_in + Duration::days(7), None);

        assert_eq!(room, Some(4));
    }

    #[test]
    fn full_inventory_has_no_room_for_any_sub_interval() {
        let engine = AvailabilityEngine::new(12);
        let check_in = date(2024, 1, 1);
        let reservations: Vec<_> = (1..=12).map(|room| stay(room, room, check_in, 7)).collect();

        for offset in 0..7 {
            let start = check_in + Duration::days(offset);
            for len in 1..=(7 - offset) {
                let end = start + Duration::days(len);
                assert_eq!(engine.find_available_room(&reservations, start, end, None), None);
            }
        }
    }

    #[test]
    fn checkout_day_does_not_conflict_with_checkin() {
        let engine = AvailabilityEngine::new(1);
        let reservations = [stay(1, 1, date(2024, 1, 1), 7)];

        let room =
            engine.find_available_room(&reservations, date(2024, 1, 8), date(2024, 1, 10), None);

        assert_eq!(room, Some(1));
        assert!(engine.is_room_free(&reservations, 1, date(2024, 1, 8), date(2024, 1, 10)));
    }

    #[test]
    fn excluded_booking_does_not_block_itself() {
        let engine = AvailabilityEngine::new(1);
        let reservations = [stay(42, 1, date(2024, 5, 1), 3)];

        let start = date(2024, 5, 2);
        let end = date(2024, 5, 6);
        assert_eq!(engine.find_available_room(&reservations, start, end, None), None);
        assert_eq!(engine.find_available_room(&reservations, start, end, Some(42)), Some(1));
    }

    #[test]
    fn room_is_busy_only_when_its_own_stay_overlaps() {
        let engine = AvailabilityEngine::new(12);
        let reservations = [stay(1, 4, date(2024, 2, 10), 5), stay(2, 5, date(2024, 2, 1), 30)];

        assert!(!engine.is_room_free(&reservations, 4, date(2024, 2, 14), date(2024, 2, 16)));
        assert!(!engine.is_room_free(&reservations, 4, date(2024, 2, 5), date(2024, 2, 11)));
        assert!(engine.is_room_free(&reservations, 4, date(2024, 2, 15), date(2024, 2, 20)));
        assert!(engine.is_room_free(&reservations, 4, date(2024, 2, 1), date(2024, 2, 10)));
        assert!(engine.is_room_free(&reservations, 6, date(2024, 2, 1), date(2024, 3, 1)));
    }

    #[test]
    fn lists_free_rooms_ascending_and_repeatably() {
        let engine = AvailabilityEngine::new(5);
        let check_in = date(2024, 6, 1);
        let reservations = [stay(1, 2, check_in, 3), stay(2, 4, check_in, 3)];
        let check_out = check_in + Duration::days(3);

        let first = engine.list_available_rooms(&reservations, check_in, check_out);
        let second = engine.list_available_rooms(&reservations, check_in, check_out);

        assert_eq!(first, vec![1, 3, 5]);
        assert_eq!(first, second);
    }

    #[test]
    fn full_week_is_unavailable_for_week_long_stays() {
        let engine = AvailabilityEngine::new(12);
        let check_in = date(2024, 1, 1);
        let reservations: Vec<_> = (1..=12).map(|room| stay(room, room, check_in, 7)).collect();

        let dates = engine.list_unavailable_dates(&reservations, 7);

        let expected: BTreeSet<_> = (0..7).map(|d| check_in + Duration::days(d)).collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn partially_booked_dates_stay_available() {
        let engine = AvailabilityEngine::new(3);
        let check_in = date(2024, 8, 1);
        let reservations = [stay(1, 1, check_in, 4), stay(2, 2, check_in, 4)];

        assert!(engine.list_unavailable_dates(&reservations, 2).is_empty());
    }

    #[test]
    fn staggered_bookings_block_longer_stays() {
        let engine = AvailabilityEngine::new(2);
        let reservations = [
            stay(1, 1, date(2024, 8, 1), 2),
            stay(2, 2, date(2024, 8, 3), 2),
        ];

        // A two night stay fits nowhere on the 2nd, but a single night does.
        let long = engine.list_unavailable_dates(&reservations, 2);
        let short = engine.list_unavailable_dates(&reservations, 1);

        assert!(long.contains(&date(2024, 8, 2)));
        assert!(short.is_empty());
    }

    #[test]
    fn durations_past_the_calendar_flag_nothing() {
        let engine = AvailabilityEngine::new(1);
        let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let reservations = vec![stay(1, 1, check_in, 3)];

        assert!(engine.list_unavailable_dates(&reservations, i32::MAX).is_empty());
    }
}
