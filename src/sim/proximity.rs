//! Dock target resolution
//!
//! Each tick the vessel is matched against every island: the nearest one
//! within its interaction radius becomes the dock target, or none. A plain
//! O(n) scan; the world holds at most a few dozen islands.

use super::state::{Island, Vessel};

/// Nearest island whose interaction radius (`size + margin`) contains the
/// vessel, or `None`. Exact-distance ties go to the first-encountered
/// island; callers must not rely on which.
pub fn resolve(vessel: &Vessel, islands: &[Island], margin: f32) -> Option<u32> {
    let mut best: Option<u32> = None;
    let mut best_dist = f32::INFINITY;

    for island in islands {
        let dist = vessel.pos.distance(island.pos);
        if dist < best_dist && dist < island.size + margin {
            best_dist = dist;
            best = Some(island.id);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn island(id: u32, x: f32, size: f32) -> Island {
        Island {
            id,
            pos: Vec2::new(x, 0.0),
            size,
            name: format!("isle {id}"),
            description: String::new(),
            deployment: None,
        }
    }

    #[test]
    fn test_nearest_qualifying_wins() {
        let vessel = Vessel::new(Vec2::ZERO);
        // Distances 50, 120, 300; margin 100 means only the first two
        // qualify (size + 100 reach of 160 and 180, island 3 reach 140)
        let islands = vec![
            island(1, 50.0, 60.0),
            island(2, 120.0, 80.0),
            island(3, 300.0, 40.0),
        ];
        assert_eq!(resolve(&vessel, &islands, 100.0), Some(1));
    }

    #[test]
    fn test_none_when_out_of_range() {
        let vessel = Vessel::new(Vec2::ZERO);
        let islands = vec![island(1, 500.0, 80.0), island(2, 800.0, 120.0)];
        assert_eq!(resolve(&vessel, &islands, 100.0), None);
    }

    #[test]
    fn test_qualification_is_per_island_size() {
        let vessel = Vessel::new(Vec2::ZERO);
        // The closer island is out of reach for its size; the farther one
        // qualifies because it is larger
        let islands = vec![island(1, 150.0, 20.0), island(2, 180.0, 100.0)];
        assert_eq!(resolve(&vessel, &islands, 100.0), Some(2));
    }

    #[test]
    fn test_empty_world() {
        let vessel = Vessel::new(Vec2::ZERO);
        assert_eq!(resolve(&vessel, &[], 100.0), None);
    }

    #[test]
    fn test_tie_goes_to_some_island() {
        // Exactly equal distances are a don't-care: either island is
        // acceptable, as long as one of them is returned
        let vessel = Vessel::new(Vec2::ZERO);
        let islands = vec![island(1, 100.0, 80.0), island(2, -100.0, 80.0)];
        let target = resolve(&vessel, &islands, 100.0);
        assert!(target == Some(1) || target == Some(2));
    }
}
