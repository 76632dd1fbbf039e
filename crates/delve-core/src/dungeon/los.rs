//! Line of sight over a finished dungeon
//!
//! Straight rows and columns are scanned cell by cell. Anything else is
//! rasterised with an x-driven Bresenham walk that accumulates the slope
//! in floating point.

use super::coord::Coord;
use super::grid::Dungeon;

/// Check whether the straight segment from `start` to `end` crosses only
/// Ground.
///
/// The far end of the segment is never inspected, and the general case
/// also stops one column short of it. Lines steeper than 45 degrees advance
/// at most one row per column, exactly like the row-by-row walk.
pub fn is_clear_path(dungeon: &Dungeon, start: Coord, end: Coord) -> bool {
    if start == end {
        return true;
    }

    // Same row
    if start.y == end.y {
        let y = start.y;
        return (start.x.min(end.x)..start.x.max(end.x)).all(|x| is_open(dungeon, x, y));
    }

    // Same column
    if start.x == end.x {
        let x = start.x;
        return (start.y.min(end.y)..start.y.max(end.y)).all(|y| is_open(dungeon, x, y));
    }

    // Bresenham's line algorithm, walked from the leftmost endpoint.
    // Deltas are taken in i64 so far-apart endpoints cannot overflow.
    let (left, right) = if start.x <= end.x {
        (start, end)
    } else {
        (end, start)
    };
    let dx = (i64::from(start.x) - i64::from(end.x)) as f32;
    let dy = (i64::from(start.y) - i64::from(end.y)) as f32;
    let derr = (dy / dx).abs();
    let y_step: i64 = if right.y > left.y { 1 } else { -1 };

    let mut err = -1.0f32;
    let mut y = i64::from(left.y);
    for x in i64::from(left.x)..i64::from(right.x) - 1 {
        let Ok(row) = i32::try_from(y) else {
            return false;
        };
        // x stays inside left.x..right.x, so it always fits
        if !is_open(dungeon, x as i32, row) {
            return false;
        }
        err += derr;
        if err >= 0.0 {
            y += y_step;
            err -= 1.0;
        }
    }
    true
}

fn is_open(dungeon: &Dungeon, x: i32, y: i32) -> bool {
    !dungeon.cell_at(x, y).blocks_sight()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::walk::WalkStats;

    /// Open floor of the given size with `rock` left solid
    fn floor_with_rock(width: i32, height: i32, rock: &[(i32, i32)]) -> Dungeon {
        let ground = (0..width)
            .flat_map(|x| (0..height).map(move |y| Coord::new(x, y)))
            .filter(|c| !rock.contains(&(c.x, c.y)));
        Dungeon::from_ground(
            width,
            height,
            Coord::new(0, 0),
            Coord::new(width - 1, height - 1),
            ground,
            WalkStats::default(),
        )
    }

    #[test]
    fn test_same_point_is_clear() {
        let dungeon = floor_with_rock(3, 3, &[(1, 1)]);
        assert!(is_clear_path(&dungeon, Coord::new(0, 0), Coord::new(0, 0)));
        // even standing on rock
        assert!(is_clear_path(&dungeon, Coord::new(1, 1), Coord::new(1, 1)));
    }

    #[test]
    fn test_row_blocked_by_middle_rock() {
        let dungeon = floor_with_rock(3, 1, &[(1, 0)]);
        assert!(!is_clear_path(&dungeon, Coord::new(0, 0), Coord::new(2, 0)));
        assert!(!is_clear_path(&dungeon, Coord::new(2, 0), Coord::new(0, 0)));
    }

    #[test]
    fn test_row_far_end_not_inspected() {
        let dungeon = floor_with_rock(3, 1, &[(2, 0)]);
        assert!(is_clear_path(&dungeon, Coord::new(0, 0), Coord::new(2, 0)));
        assert!(is_clear_path(&dungeon, Coord::new(0, 0), Coord::new(1, 0)));
    }

    #[test]
    fn test_column_blocked() {
        let dungeon = floor_with_rock(1, 5, &[(0, 2)]);
        assert!(!is_clear_path(&dungeon, Coord::new(0, 0), Coord::new(0, 4)));
        assert!(!is_clear_path(&dungeon, Coord::new(0, 4), Coord::new(0, 0)));
        assert!(is_clear_path(&dungeon, Coord::new(0, 0), Coord::new(0, 2)));
        assert!(is_clear_path(&dungeon, Coord::new(0, 3), Coord::new(0, 4)));
    }

    #[test]
    fn test_diagonal_traversal_cells() {
        // (0,0) -> (4,2) rasterises (0,0) (1,0) (2,1) before stopping
        let open = floor_with_rock(5, 5, &[]);
        assert!(is_clear_path(&open, Coord::new(0, 0), Coord::new(4, 2)));

        let blocked = floor_with_rock(5, 5, &[(2, 1)]);
        assert!(!is_clear_path(&blocked, Coord::new(0, 0), Coord::new(4, 2)));
        assert!(!is_clear_path(&blocked, Coord::new(4, 2), Coord::new(0, 0)));

        let off_line = floor_with_rock(5, 5, &[(2, 0), (1, 1)]);
        assert!(is_clear_path(&off_line, Coord::new(0, 0), Coord::new(4, 2)));
    }

    #[test]
    fn test_diagonal_stops_short_of_destination() {
        let dungeon = floor_with_rock(5, 5, &[(3, 1), (4, 2)]);
        assert!(is_clear_path(&dungeon, Coord::new(0, 0), Coord::new(4, 2)));
    }

    #[test]
    fn test_descending_line() {
        // (0,4) -> (4,2) rasterises (0,4) (1,4) (2,3)
        let blocked = floor_with_rock(5, 5, &[(2, 3)]);
        assert!(!is_clear_path(&blocked, Coord::new(0, 4), Coord::new(4, 2)));
        assert!(!is_clear_path(&blocked, Coord::new(4, 2), Coord::new(0, 4)));

        let blocked_start = floor_with_rock(5, 5, &[(1, 4)]);
        assert!(!is_clear_path(&blocked_start, Coord::new(4, 2), Coord::new(0, 4)));
    }

    #[test]
    fn test_steep_line_advances_one_row_per_column() {
        // (0,0) -> (3,6) inspects only (0,0) and (1,1)
        let open = floor_with_rock(7, 7, &[]);
        assert!(is_clear_path(&open, Coord::new(0, 0), Coord::new(3, 6)));

        let blocked = floor_with_rock(7, 7, &[(1, 1)]);
        assert!(!is_clear_path(&blocked, Coord::new(0, 0), Coord::new(3, 6)));
        assert!(!is_clear_path(&blocked, Coord::new(3, 6), Coord::new(0, 0)));

        let beside = floor_with_rock(7, 7, &[(0, 1), (1, 2), (2, 2), (2, 4), (3, 6)]);
        assert!(is_clear_path(&beside, Coord::new(0, 0), Coord::new(3, 6)));
    }

    #[test]
    fn test_steep_one_column_segment_inspects_nothing() {
        let dungeon = floor_with_rock(7, 7, &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 5)]);
        assert!(is_clear_path(&dungeon, Coord::new(0, 0), Coord::new(1, 5)));
        assert!(is_clear_path(&dungeon, Coord::new(1, 5), Coord::new(0, 0)));
    }

    #[test]
    fn test_extreme_endpoints_do_not_overflow() {
        let dungeon = floor_with_rock(10, 10, &[]);
        let (min, max) = (i32::MIN, i32::MAX);
        assert!(!is_clear_path(&dungeon, Coord::new(min, 0), Coord::new(max, 1)));
        assert!(!is_clear_path(&dungeon, Coord::new(max, 1), Coord::new(min, 0)));
        assert!(!is_clear_path(&dungeon, Coord::new(min, min), Coord::new(max, max)));
        assert!(!is_clear_path(&dungeon, Coord::new(max - 10, max), Coord::new(max, max - 1)));
        assert!(!is_clear_path(&dungeon, Coord::new(min, 5), Coord::new(max, 5)));
        assert!(!is_clear_path(&dungeon, Coord::new(5, min), Coord::new(5, max)));
    }

    #[test]
    fn test_out_of_bounds_segment_is_blocked() {
        let dungeon = floor_with_rock(5, 5, &[]);
        assert!(!is_clear_path(&dungeon, Coord::new(-3, 0), Coord::new(3, 0)));
        assert!(!is_clear_path(&dungeon, Coord::new(-4, -2), Coord::new(4, 2)));
    }
}
