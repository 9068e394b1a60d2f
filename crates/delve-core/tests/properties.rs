use delve_core::dungeon::{place_rooms, Grid, RegionCounter};
use delve_core::{generate, DungeonRng, GeneratorConfig};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rooms_never_overlap(width in 6usize..64, height in 6usize..64, seed in any::<u64>()) {
        let mut grid = Grid::new(width, height);
        let mut regions = RegionCounter::new();
        let mut rng = DungeonRng::new(seed);
        let rooms = place_rooms(&mut grid, &mut regions, &GeneratorConfig::default(), &mut rng);

        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn prop_dungeon_is_connected(width in 6usize..48, height in 6usize..48, seed in any::<u64>()) {
        let dungeon = generate(width, height, &mut DungeonRng::new(seed)).unwrap();
        prop_assert!(dungeon.is_connected());
        prop_assert_eq!(dungeon.stats().connectors_opened, dungeon.stats().regions() - 1);
    }

    #[test]
    fn prop_border_stays_wall(width in 6usize..48, height in 6usize..48, seed in any::<u64>()) {
        let dungeon = generate(width, height, &mut DungeonRng::new(seed)).unwrap();
        prop_assert!(dungeon.grid().border_is_wall());
    }

    #[test]
    fn prop_generation_is_deterministic(width in 6usize..40, height in 6usize..40, seed in any::<u64>()) {
        let a = generate(width, height, &mut DungeonRng::new(seed)).unwrap();
        let b = generate(width, height, &mut DungeonRng::new(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_walls_have_no_region(width in 6usize..40, height in 6usize..40, seed in any::<u64>()) {
        let dungeon = generate(width, height, &mut DungeonRng::new(seed)).unwrap();
        for tile in dungeon.tiles() {
            prop_assert_eq!(tile.is_floor(), tile.region != 0);
        }
    }
}
