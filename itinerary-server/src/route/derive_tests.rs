//! Unit and property tests for route derivation.

use super::*;
use crate::domain::DayNumber;
use crate::editor;
use crate::route::{SegmentKind, WithinTolerance};

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

fn day(n: u32, start: (f64, f64)) -> ItineraryDay {
    ItineraryDay::new(DayNumber::new(n).unwrap(), coord(start.0, start.1))
}

fn day_with_end(n: u32, start: (f64, f64), end: (f64, f64)) -> ItineraryDay {
    day(n, start).with_end(coord(end.0, end.1))
}

fn day_without_start(n: u32) -> ItineraryDay {
    ItineraryDay {
        day: DayNumber::new(n).unwrap(),
        description: String::new(),
        start: None,
        end: None,
    }
}

fn positions(geometry: &RouteGeometry) -> Vec<(Coordinate, MarkerRole, u32)> {
    geometry
        .markers
        .iter()
        .map(|m| (m.position, m.role, m.day.get()))
        .collect()
}

#[test]
fn empty_itinerary_draws_nothing() {
    let geometry = derive_route(&Itinerary::empty());

    assert!(geometry.markers.is_empty());
    assert!(geometry.segments.is_empty());
    assert_eq!(geometry.viewport, None);
    assert!(geometry.is_empty());
}

#[test]
fn continuous_travel_has_no_connector() {
    let itinerary = Itinerary::new(vec![
        day_with_end(1, (-1.29, 36.82), (-1.30, 36.90)),
        day(2, (-1.30, 36.90)),
    ]);

    let geometry = derive_route(&itinerary);

    assert_eq!(
        positions(&geometry),
        vec![
            (coord(-1.29, 36.82), MarkerRole::Start, 1),
            (coord(-1.30, 36.90), MarkerRole::End, 1),
            (coord(-1.30, 36.90), MarkerRole::Start, 2),
        ]
    );
    assert_eq!(geometry.segments.len(), 1);
    let segment = &geometry.segments[0];
    assert_eq!(segment.kind, SegmentKind::IntraDayRoute);
    assert_eq!(segment.from, coord(-1.29, 36.82));
    assert_eq!(segment.to, coord(-1.30, 36.90));
    assert_eq!(segment.label, "Day 1");
}

#[test]
fn jump_between_days_draws_connector() {
    let itinerary = Itinerary::new(vec![day(1, (0.0, 0.0)), day(2, (1.0, 1.0))]);

    let geometry = derive_route(&itinerary);

    assert_eq!(
        positions(&geometry),
        vec![
            (coord(0.0, 0.0), MarkerRole::Start, 1),
            (coord(1.0, 1.0), MarkerRole::Start, 2),
        ]
    );
    assert_eq!(
        geometry.segments,
        vec![Segment {
            from: coord(0.0, 0.0),
            to: coord(1.0, 1.0),
            kind: SegmentKind::InterDayConnector,
            label: "Day 1 to Day 2".into(),
        }]
    );
}

#[test]
fn connector_leaves_from_distinct_end() {
    let itinerary = Itinerary::new(vec![
        day_with_end(1, (0.0, 0.0), (0.5, 0.5)),
        day(2, (1.0, 1.0)),
    ]);

    let geometry = derive_route(&itinerary);
    let connectors: Vec<_> = geometry
        .segments_of(SegmentKind::InterDayConnector)
        .collect();

    assert_eq!(connectors.len(), 1);
    assert_eq!(connectors[0].from, coord(0.5, 0.5));
    assert_eq!(connectors[0].to, coord(1.0, 1.0));
}

#[test]
fn end_equal_to_start_behaves_like_no_end() {
    let with_equal_end = Itinerary::new(vec![
        day_with_end(1, (2.0, 3.0), (2.0, 3.0)),
        day(2, (4.0, 5.0)),
    ]);
    let without_end = Itinerary::new(vec![day(1, (2.0, 3.0)), day(2, (4.0, 5.0))]);

    assert_eq!(derive_route(&with_equal_end), derive_route(&without_end));
}

#[test]
fn connector_labels_use_day_numbers_not_positions() {
    let itinerary = Itinerary::new(vec![day(7, (0.0, 0.0)), day(3, (1.0, 1.0))]);

    let geometry = derive_route(&itinerary);

    assert_eq!(geometry.segments[0].label, "Day 7 to Day 3");
}

#[test]
fn duplicate_day_numbers_do_not_matter() {
    let itinerary = Itinerary::new(vec![
        day(1, (0.0, 0.0)),
        day(1, (1.0, 1.0)),
        day(1, (2.0, 2.0)),
    ]);

    let geometry = derive_route(&itinerary);

    assert_eq!(geometry.markers.len(), 3);
    assert_eq!(geometry.segments.len(), 2);
    assert!(geometry.segments.iter().all(|s| s.label == "Day 1 to Day 1"));
}

#[test]
fn markers_carry_description() {
    let itinerary = Itinerary::new(vec![
        day_with_end(1, (0.0, 0.0), (1.0, 1.0)).with_description("Masai Mara game drive"),
    ]);

    let geometry = derive_route(&itinerary);

    assert!(
        geometry
            .markers
            .iter()
            .all(|m| m.description == "Masai Mara game drive")
    );
}

#[test]
fn missing_start_is_skipped() {
    let itinerary = Itinerary::new(vec![day_without_start(1)]);

    let geometry = derive_route(&itinerary);

    assert!(geometry.is_empty());
    assert_eq!(geometry.viewport, None);
}

#[test]
fn missing_start_end_is_ignored() {
    let mut incomplete = day_without_start(1);
    incomplete.end = Some(coord(5.0, 5.0));
    let itinerary = Itinerary::new(vec![incomplete]);

    let geometry = derive_route(&itinerary);

    assert!(geometry.is_empty());
}

/// A day without a start sandwiched between two drawable days breaks the
/// chain: connectors are only checked between adjacent array positions, so
/// nothing joins day 1 to day 3.
#[test]
fn missing_start_sandwiched_breaks_chain() {
    let itinerary = Itinerary::new(vec![
        day(1, (0.0, 0.0)),
        day_without_start(2),
        day(3, (1.0, 1.0)),
    ]);

    let geometry = derive_route(&itinerary);

    assert_eq!(
        positions(&geometry),
        vec![
            (coord(0.0, 0.0), MarkerRole::Start, 1),
            (coord(1.0, 1.0), MarkerRole::Start, 3),
        ]
    );
    assert!(geometry.segments.is_empty());
    assert!(geometry.viewport.is_some());
}

#[test]
fn missing_start_next_day_gets_no_connector() {
    let itinerary = Itinerary::new(vec![day(1, (0.0, 0.0)), day_without_start(2)]);

    let geometry = derive_route(&itinerary);

    assert_eq!(geometry.markers.len(), 1);
    assert!(geometry.segments.is_empty());
}

#[test]
fn viewport_bounds_and_focus() {
    let itinerary = Itinerary::new(vec![
        day_with_end(1, (-1.0, 36.0), (-2.0, 37.0)),
        day(2, (0.5, 35.0)),
    ]);

    let geometry = derive_route(&itinerary);
    let viewport = geometry.viewport.unwrap();

    assert_eq!(viewport.bounds.south, -2.0);
    assert_eq!(viewport.bounds.north, 0.5);
    assert_eq!(viewport.bounds.west, 35.0);
    assert_eq!(viewport.bounds.east, 37.0);
    // Three marker positions, floor(3 / 2) = 1: the day 1 end.
    assert_eq!(viewport.focus, coord(-2.0, 37.0));
}

#[test]
fn viewport_focus_even_count() {
    let itinerary = Itinerary::new(vec![
        day(1, (0.0, 0.0)),
        day(2, (1.0, 1.0)),
        day(3, (2.0, 2.0)),
        day(4, (3.0, 3.0)),
    ]);

    let viewport = derive_route(&itinerary).viewport.unwrap();

    assert_eq!(viewport.focus, coord(2.0, 2.0));
}

#[test]
fn viewport_counts_coincident_markers() {
    // Markers at the same point still count towards the focus index.
    let itinerary = Itinerary::new(vec![
        day_with_end(1, (0.0, 0.0), (1.0, 1.0)),
        day(2, (1.0, 1.0)),
        day(3, (1.0, 1.0)),
        day(4, (9.0, 9.0)),
    ]);

    let viewport = derive_route(&itinerary).viewport.unwrap();

    // Positions: (0,0) (1,1) (1,1) (1,1) (9,9); index 2.
    assert_eq!(viewport.focus, coord(1.0, 1.0));
}

#[test]
fn tolerance_strategy_suppresses_near_duplicates() {
    let itinerary = Itinerary::new(vec![
        day_with_end(1, (-1.2921, 36.8219), (-1.2921, 36.821_900_1)),
        day(2, (-1.2921, 36.8219)),
    ]);

    let exact = RouteDeriver::new().derive(&itinerary);
    assert_eq!(exact.markers.len(), 3);
    assert_eq!(exact.segments.len(), 2);

    let tolerant = RouteDeriver::with_equality(WithinTolerance::new(1e-6)).derive(&itinerary);
    assert_eq!(tolerant.markers.len(), 2);
    assert!(tolerant.segments.is_empty());
}

#[test]
fn removed_day_is_never_drawn() {
    let removed_point = coord(10.0, 10.0);
    let itinerary = Itinerary::new(vec![
        day(1, (0.0, 0.0)),
        day_with_end(2, (10.0, 10.0), (10.0, 10.0)),
        day(3, (2.0, 2.0)),
    ]);

    let edited = editor::remove_day(&itinerary, 1).unwrap();
    let geometry = derive_route(&edited);

    assert!(geometry.markers.iter().all(|m| m.position != removed_point));
    assert!(
        geometry
            .segments
            .iter()
            .all(|s| s.from != removed_point && s.to != removed_point)
    );
    assert_eq!(geometry.segments.len(), 1);
    assert_eq!(geometry.segments[0].label, "Day 1 to Day 3");
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Small grid so generated days often coincide.
    fn grid_coord() -> impl Strategy<Value = Coordinate> {
        (0i32..4, 0i32..4).prop_map(|(lat, lon)| coord(f64::from(lat), f64::from(lon)))
    }

    fn any_day() -> impl Strategy<Value = ItineraryDay> {
        (
            1u32..10,
            proptest::option::weighted(0.85, grid_coord()),
            proptest::option::of(grid_coord()),
        )
            .prop_map(|(n, start, end)| ItineraryDay {
                day: DayNumber::new(n).unwrap(),
                description: String::new(),
                start,
                end,
            })
    }

    fn any_itinerary() -> impl Strategy<Value = Itinerary> {
        proptest::collection::vec(any_day(), 0..8).prop_map(Itinerary::new)
    }

    /// Markers contributed by day `i`, found by skipping the markers of
    /// the days before it.
    fn day_markers<'a>(
        geometry: &'a RouteGeometry,
        itinerary: &Itinerary,
        i: usize,
    ) -> &'a [Marker] {
        let per_day: Vec<usize> = itinerary
            .iter()
            .map(|d| match (d.start, d.distinct_end()) {
                (None, _) => 0,
                (Some(_), None) => 1,
                (Some(_), Some(_)) => 2,
            })
            .collect();
        let offset: usize = per_day[..i].iter().sum();
        &geometry.markers[offset..offset + per_day[i]]
    }

    proptest! {
        /// A day without a distinct end yields one start marker and no
        /// intra-day route; a distinct end yields two markers and one route.
        #[test]
        fn per_day_markers_and_routes(itinerary in any_itinerary()) {
            let geometry = derive_route(&itinerary);
            prop_assert_eq!(
                geometry.markers.len(),
                itinerary
                    .iter()
                    .map(|d| match (d.start, d.distinct_end()) {
                        (None, _) => 0,
                        (Some(_), None) => 1,
                        (Some(_), Some(_)) => 2,
                    })
                    .sum::<usize>()
            );

            for (i, d) in itinerary.iter().enumerate() {
                let markers = day_markers(&geometry, &itinerary, i);
                prop_assert!(markers.iter().all(|m| m.day == d.day));
                if let Some(start) = d.start {
                    prop_assert_eq!(markers[0].role, MarkerRole::Start);
                    prop_assert_eq!(markers[0].position, start);
                }
                if let Some(end) = d.distinct_end() {
                    prop_assert_eq!(markers[1].role, MarkerRole::End);
                    prop_assert_eq!(markers[1].position, end);
                }
            }

            let expected_intra: Vec<(Coordinate, Coordinate)> = itinerary
                .iter()
                .filter_map(|d| Some((d.start?, d.distinct_end()?)))
                .collect();
            let actual_intra: Vec<(Coordinate, Coordinate)> = geometry
                .segments_of(SegmentKind::IntraDayRoute)
                .map(|s| (s.from, s.to))
                .collect();
            prop_assert_eq!(actual_intra, expected_intra);
        }

        /// Setting the end equal to the start renders exactly like clearing it.
        #[test]
        fn equal_end_same_as_absent(itinerary in any_itinerary()) {
            let with_equal_ends: Itinerary = itinerary
                .iter()
                .cloned()
                .map(|mut d| {
                    if d.distinct_end().is_none() {
                        d.end = d.start;
                    }
                    d
                })
                .collect();
            let without_equal_ends: Itinerary = itinerary
                .iter()
                .cloned()
                .map(|mut d| {
                    if d.distinct_end().is_none() {
                        d.end = None;
                    }
                    d
                })
                .collect();

            prop_assert_eq!(derive_route(&with_equal_ends), derive_route(&without_equal_ends));
        }

        /// Exactly one connector per adjacent drawable pair whose exit and
        /// next start differ, in order, from exit to next start.
        #[test]
        fn connectors_match_adjacent_pairs(itinerary in any_itinerary()) {
            let geometry = derive_route(&itinerary);

            let expected: Vec<(Coordinate, Coordinate)> = itinerary
                .days()
                .windows(2)
                .filter_map(|pair| {
                    let exit = pair[0].exit_point()?;
                    let next_start = pair[1].start?;
                    (!exit.equals(&next_start)).then_some((exit, next_start))
                })
                .collect();
            let actual: Vec<(Coordinate, Coordinate)> = geometry
                .segments_of(SegmentKind::InterDayConnector)
                .map(|s| (s.from, s.to))
                .collect();

            prop_assert_eq!(actual, expected);
        }

        /// The viewport is absent iff no day has a start, and otherwise
        /// covers every marker.
        #[test]
        fn viewport_presence_and_cover(itinerary in any_itinerary()) {
            let geometry = derive_route(&itinerary);
            let any_start = itinerary.iter().any(|d| d.start.is_some());

            prop_assert_eq!(geometry.viewport.is_some(), any_start);
            if let Some(viewport) = geometry.viewport {
                for marker in &geometry.markers {
                    prop_assert!(viewport.bounds.contains(&marker.position));
                }
                prop_assert!(geometry.markers.iter().any(|m| m.position == viewport.focus));
            }
        }

        /// Segment endpoints are always marker positions.
        #[test]
        fn segments_join_markers(itinerary in any_itinerary()) {
            let geometry = derive_route(&itinerary);
            for segment in &geometry.segments {
                prop_assert!(geometry.markers.iter().any(|m| m.position == segment.from));
                prop_assert!(geometry.markers.iter().any(|m| m.position == segment.to));
            }
        }
    }
}
