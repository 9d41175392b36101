//! Property tests over random point sets.

use proptest::prelude::*;
use u_tour::constructive::construct;
use u_tour::local_search::improve;
use u_tour::models::{Point, Tour};

fn points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..max_len)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

fn points_with_seed(max_len: usize) -> impl Strategy<Value = (Vec<Point>, Vec<usize>)> {
    points(max_len).prop_flat_map(|pts| {
        let order: Vec<usize> = (0..pts.len()).collect();
        (Just(pts), Just(order).prop_shuffle())
    })
}

fn recomputed(tour: &Tour, pts: &[Point]) -> f64 {
    tour.length(pts)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * b.abs().max(1.0)
}

proptest! {
    #[test]
    fn construct_is_valid(pts in points(60)) {
        let (tour, length) = construct(&pts, None).unwrap();
        prop_assert!(tour.is_valid(pts.len()));
        prop_assert_eq!(tour.cycle()[0], 0);
        prop_assert!(close(length, recomputed(&tour, &pts)));
    }

    #[test]
    fn construct_adopts_seed((pts, seed) in points_with_seed(40)) {
        let (tour, _) = construct(&pts, Some(seed.as_slice())).unwrap();
        prop_assert_eq!(tour.order(), seed.as_slice());
        prop_assert!(tour.is_valid(pts.len()));
    }

    #[test]
    fn improve_is_valid_monotone_and_consistent((pts, seed) in points_with_seed(40)) {
        let (tour, length) = construct(&pts, Some(seed.as_slice())).unwrap();
        let sol = improve(tour, &pts, length, None).unwrap();
        prop_assert!(sol.tour.is_valid(pts.len()));
        prop_assert!(sol.length <= length + 1e-9);
        prop_assert!(close(sol.length, recomputed(&sol.tour, &pts)));
        prop_assert!(!sol.optimal);
        prop_assert_eq!(sol.tour.cycle()[0], seed[0]);
    }

    #[test]
    fn improve_is_idempotent_at_local_optimum(pts in points(40)) {
        let (tour, length) = construct(&pts, None).unwrap();
        let first = improve(tour, &pts, length, None).unwrap();
        let second = improve(first.tour.clone(), &pts, first.length, None).unwrap();
        prop_assert_eq!(&second.tour, &first.tour);
        prop_assert_eq!(second.length, first.length);
    }

    #[test]
    fn improve_leaves_small_tours_alone((pts, seed) in points_with_seed(4)) {
        let tour = Tour::from_order(seed);
        let length = recomputed(&tour, &pts);
        let sol = improve(tour.clone(), &pts, length, None).unwrap();
        prop_assert_eq!(sol.tour, tour);
        prop_assert_eq!(sol.length, length);
    }

    #[test]
    fn expired_deadline_changes_nothing((pts, seed) in points_with_seed(40)) {
        let tour = Tour::from_order(seed);
        let length = recomputed(&tour, &pts);
        let deadline = std::time::Instant::now();
        let sol = improve(tour.clone(), &pts, length, Some(deadline)).unwrap();
        prop_assert_eq!(sol.tour, tour);
        prop_assert_eq!(sol.length, length);
    }
}
