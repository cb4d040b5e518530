// tests/bond_patterns.rs
use brickwork::{
    Bond, BrickKind, BrickRole, BrickSpec, DEFAULT_BOND_NAME, EnglishCrossBond, FlemishBond,
    LayoutError, StretcherBond, WallConfig, bond_catalog, course_width,
};

fn course(bond: &mut Bond, index: usize, config: &WallConfig) -> Vec<BrickSpec> {
    bond.generate_course(index, config)
        .unwrap_or_else(|e| panic!("course {index} failed: {e}"))
}

fn kinds(specs: &[BrickSpec]) -> Vec<BrickKind> {
    specs.iter().map(|s| s.kind).collect()
}

#[test]
fn test_reference_stretcher_course_spans_wall() {
    let config = WallConfig::default();
    let mut bond = Bond::from_name("stretcher").unwrap();

    // 21 half-modules: ten full bricks and a single half brick.
    let specs = course(&mut bond, 0, &config);
    let fulls = specs.iter().filter(|s| s.kind == BrickKind::Full).count();
    let halves = specs.iter().filter(|s| s.kind == BrickKind::Half).count();
    assert_eq!((fulls, halves), (10, 1));
    assert!((course_width(&specs, config.head_joint_mm) - 2300.0).abs() < 1e-6);
}

#[test]
fn test_stretcher_course_shapes() {
    let config = WallConfig::default();
    let mut bond = Bond::Stretcher(StretcherBond);

    for index in 0..config.course_count() {
        let specs = course(&mut bond, index, &config);
        let first = specs.first().unwrap().kind;
        let last = specs.last().unwrap().kind;
        if index % 2 == 0 {
            assert_eq!((first, last), (BrickKind::Full, BrickKind::Full));
            let interior_halves = specs[1..specs.len() - 1]
                .iter()
                .filter(|s| s.kind == BrickKind::Half)
                .count();
            assert_eq!(interior_halves, 1, "course {index}");
        } else {
            assert_eq!((first, last), (BrickKind::Half, BrickKind::Half));
        }
    }
}

#[test]
fn test_stretcher_odd_course_layout() {
    let config = WallConfig::default();
    let specs = StretcherBond.generate_course(1, &config).unwrap();

    use BrickKind::*;
    assert_eq!(
        kinds(&specs),
        vec![Half, Full, Full, Full, Full, Half, Full, Full, Full, Full, Full, Half]
    );
}

#[test]
fn test_stretcher_rejects_even_module_count() {
    let config = WallConfig::default().with_half_modules(20);
    let err = StretcherBond.generate_course(0, &config).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::PatternInfeasible { bond: "stretcher", course: 0, .. }
    ));
}

#[test]
fn test_stretcher_rejects_too_narrow_wall() {
    let config = WallConfig::default().with_half_modules(3);
    assert!(matches!(
        StretcherBond.generate_course(0, &config),
        Err(LayoutError::PatternInfeasible { .. })
    ));
}

#[test]
fn test_flemish_alternates_kinds() {
    let config = WallConfig::default();
    let mut bond = Bond::Flemish(FlemishBond);

    for index in 0..4 {
        let specs = course(&mut bond, index, &config);
        let expected_first = if index % 2 == 0 {
            BrickKind::Header
        } else {
            BrickKind::Full
        };
        assert_eq!(specs[0].kind, expected_first, "course {index}");
        for pair in specs.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind, "course {index}");
        }
        assert!((course_width(&specs, config.head_joint_mm) - config.wall_width_mm).abs() < 1e-6);
    }
}

#[test]
fn test_flemish_overshoot_is_infeasible() {
    let config = WallConfig::default().with_half_modules(20);
    let err = FlemishBond.generate_course(0, &config).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::PatternInfeasible { bond: "flemish", .. }
    ));
}

#[test]
fn test_english_cross_header_course() {
    let config = WallConfig::default();
    let specs = EnglishCrossBond.generate_course(0, &config).unwrap();
    assert_eq!(specs.len(), 21);
    assert!(specs.iter().all(|s| s.kind == BrickKind::Header && s.role.is_none()));
}

#[test]
fn test_english_cross_single_cross_header() {
    let config = WallConfig::default();
    let specs = EnglishCrossBond.generate_course(1, &config).unwrap();

    assert_eq!(specs.first().unwrap().kind, BrickKind::Half);
    assert_eq!(specs.last().unwrap().kind, BrickKind::Half);
    let crosses: Vec<usize> = specs
        .iter()
        .enumerate()
        .filter(|(_, s)| s.role == Some(BrickRole::CrossHeader))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(crosses.len(), 1);

    // Nine full bricks: five on the left, four on the right.
    let cross = crosses[0];
    assert_eq!(cross, 6);
    let left = course_width(&specs[..cross], config.head_joint_mm);
    let right = course_width(&specs[cross + 1..], config.head_joint_mm);
    assert!((left - right).abs() <= config.full_module_mm() + 1e-6);
}

#[test]
fn test_english_cross_symmetric_when_modules_allow() {
    let config = WallConfig::default().with_half_modules(23);
    let specs = EnglishCrossBond.generate_course(1, &config).unwrap();

    let cross = specs
        .iter()
        .position(|s| s.role == Some(BrickRole::CrossHeader))
        .unwrap();
    let left = course_width(&specs[..cross], config.head_joint_mm);
    let right = course_width(&specs[cross + 1..], config.head_joint_mm);
    assert!((left - right).abs() < 1e-6, "left {left} right {right}");
}

#[test]
fn test_english_cross_parity_mismatch() {
    let config = WallConfig::default().with_half_modules(20);
    assert!(EnglishCrossBond.generate_course(0, &config).is_ok());
    assert!(matches!(
        EnglishCrossBond.generate_course(1, &config),
        Err(LayoutError::PatternInfeasible { bond: "english-cross", course: 1, .. })
    ));
}

#[test]
fn test_width_mismatch_is_caught() {
    // Full bricks no longer span two half-modules.
    let mut config = WallConfig::default();
    config.brick_full.length = 200.0;
    let mut bond = Bond::default();
    assert!(matches!(
        bond.generate_course(0, &config),
        Err(LayoutError::WidthMismatch { course: 0, .. })
    ));
}

#[test]
fn test_misaligned_width_fails_every_modular_bond() {
    let config = WallConfig {
        wall_width_mm: 2301.0,
        ..WallConfig::default()
    };
    for name in ["stretcher", "english-cross", "wild"] {
        let mut bond = Bond::from_name(name).unwrap();
        assert!(
            matches!(
                bond.generate_course(0, &config),
                Err(LayoutError::MisalignedWidth { .. })
            ),
            "{name}"
        );
    }
}

#[test]
fn test_catalog_yields_fresh_named_bonds() {
    let catalog = bond_catalog();
    assert_eq!(
        catalog.keys().copied().collect::<Vec<_>>(),
        vec!["english-cross", "flemish", "stretcher", "wild"]
    );
    for (name, bond) in &catalog {
        assert_eq!(bond.name(), *name);
    }
    assert_eq!(catalog.len(), Bond::NAMES.len());
    for name in Bond::NAMES {
        assert!(catalog.contains_key(name), "{name} missing from catalog");
        assert_eq!(Bond::from_name(name).unwrap().name(), name);
    }
    assert_eq!(Bond::default().name(), DEFAULT_BOND_NAME);
    assert_eq!("flemish".parse::<Bond>().unwrap().name(), "flemish");
    assert_eq!(
        Bond::from_name("herringbone").unwrap_err(),
        LayoutError::UnknownBond("herringbone".into())
    );
}
