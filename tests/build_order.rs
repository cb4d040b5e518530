// tests/build_order.rs
use brickwork::{
    Bond, BrickId, BuildStrategy, BuildSummary, LayoutError, Wall, WallBuilder, WallConfig,
    WildBond, strategy_catalog,
};

fn wall(bond: Bond) -> Wall {
    WallBuilder::new(WallConfig::default(), bond)
        .unwrap()
        .build()
        .unwrap()
}

fn bonds() -> Vec<Bond> {
    vec![
        Bond::from_name("stretcher").unwrap(),
        Bond::from_name("flemish").unwrap(),
        Bond::from_name("english-cross").unwrap(),
        Bond::Wild(WildBond::new().with_seed(8)),
    ]
}

fn assert_permutation(wall: &Wall, order: &[BrickId]) {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..wall.len()).collect::<Vec<_>>());
}

#[test]
fn test_orders_are_permutations() {
    for bond in bonds() {
        let name = bond.name();
        let wall = wall(bond);
        for strategy in BuildStrategy::ALL {
            let order = strategy.order_bricks(&wall);
            assert_eq!(order.len(), wall.len(), "{name} / {}", strategy.name());
            assert_permutation(&wall, &order);
        }
    }
}

#[test]
fn test_optimized_visits_strides_bottom_row_first() {
    for bond in bonds() {
        let wall = wall(bond);
        let order = BuildStrategy::Optimized.order_bricks(&wall);

        let cells: Vec<(usize, usize)> = order
            .iter()
            .map(|&id| {
                let stride = wall.stride_of(wall.brick_by_id(id).unwrap()).unwrap();
                (stride.row, stride.col)
            })
            .collect();
        assert!(
            cells.windows(2).all(|w| w[0] <= w[1]),
            "strides must be visited in (row, col) order"
        );
    }
}

#[test]
fn test_optimized_serpentine_within_course() {
    for bond in bonds() {
        let wall = wall(bond);
        let order = BuildStrategy::Optimized.order_bricks(&wall);

        for pair in order.windows(2) {
            let a = wall.brick_by_id(pair[0]).unwrap();
            let b = wall.brick_by_id(pair[1]).unwrap();
            if a.stride_id != b.stride_id || a.course_index != b.course_index {
                continue;
            }
            if a.course_index % 2 == 0 {
                assert!(a.x_mm < b.x_mm, "even course {} must run left to right", a.course_index);
            } else {
                assert!(a.x_mm > b.x_mm, "odd course {} must run right to left", a.course_index);
            }
        }
    }
}

#[test]
fn test_optimized_courses_ascend_within_stride() {
    let wall = wall(Bond::default());
    let order = BuildStrategy::Optimized.order_bricks(&wall);
    for pair in order.windows(2) {
        let a = wall.brick_by_id(pair[0]).unwrap();
        let b = wall.brick_by_id(pair[1]).unwrap();
        if a.stride_id == b.stride_id {
            assert!(a.course_index <= b.course_index);
        }
    }
}

#[test]
fn test_optimized_summary_counts_one_move_per_stride() {
    let wall = wall(Bond::default());
    let strategy = BuildStrategy::Optimized;
    let order = strategy.order_bricks(&wall);
    let summary = strategy.summarize(&wall, &order);

    assert_eq!(
        summary,
        BuildSummary {
            stride_switches: 5,
            distinct_strides: 6,
            total_bricks: 368,
        }
    );
    assert_eq!(
        summary.to_string(),
        "stride switches=5, distinct strides=6, total bricks=368"
    );
}

#[test]
fn test_course_by_course_moves_more() {
    let wall = wall(Bond::default());
    let optimized = BuildStrategy::Optimized;
    let naive = BuildStrategy::CourseByCourse;

    let naive_order = naive.order_bricks(&wall);
    assert_eq!(naive_order, (0..wall.len()).collect::<Vec<_>>());

    let naive_summary = naive.summarize(&wall, &naive_order);
    let optimized_summary = optimized.summarize(&wall, &optimized.order_bricks(&wall));
    assert!(naive_summary.stride_switches > optimized_summary.stride_switches);
    assert_eq!(naive_summary.distinct_strides, optimized_summary.distinct_strides);
}

#[test]
fn test_empty_order_summary() {
    let wall = wall(Bond::default());
    assert_eq!(
        BuildSummary::of(&wall, &[]),
        BuildSummary {
            stride_switches: 0,
            distinct_strides: 0,
            total_bricks: 0,
        }
    );
}

#[test]
fn test_strategy_catalog() {
    let names: Vec<_> = strategy_catalog().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["optimized", "course-by-course"]);
    assert_eq!(BuildStrategy::default(), BuildStrategy::Optimized);
    assert_eq!(
        "course-by-course".parse::<BuildStrategy>(),
        Ok(BuildStrategy::CourseByCourse)
    );
    assert_eq!(
        BuildStrategy::from_name("random"),
        Err(LayoutError::UnknownStrategy("random".into()))
    );
    assert!(!BuildStrategy::Optimized.description().is_empty());
}
