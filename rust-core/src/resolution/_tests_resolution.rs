#[cfg(test)]
mod _tests_resolution {
    use super::super::cell_constants::CellConstants;
    use super::super::d_spacing::{
        compute_resolution, inverse_d_spacing, scattering_vectors_from_flat, ResolutionCalculator,
    };
    use super::super::space_group_table::{CrystalFamily, SpaceGroupRange, SpaceGroupTable};
    use crate::error::DiffuseError;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    // ==================== Orthogonal cells ====================

    #[test]
    fn test_cubic_cell_d_spacings() {
        let cell = CellConstants::cubic(10.0).unwrap();
        let vectors = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
        ];
        let d = compute_resolution(200, &cell, &vectors);

        assert_eq!(d.len(), 3);
        assert_relative_eq!(d[0], 10.0, epsilon = 1e-12);
        assert_relative_eq!(d[1], 5.0, epsilon = 1e-12);
        // Origin is clamped to 1 / 1e-5
        assert!(d[2].is_finite());
        assert_relative_eq!(d[2], 1e5, epsilon = 1e-6);
    }

    #[test]
    fn test_orthorhombic_cell() {
        let cell = CellConstants::new(10.0, 20.0, 30.0, 90.0, 90.0, 90.0).unwrap();
        let d = compute_resolution(19, &cell, &[Vector3::new(1.0, 1.0, 1.0)]);
        let expected = 1.0 / (0.01_f64 + 0.0025 + 1.0 / 900.0).sqrt();
        assert_relative_eq!(d[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn test_output_order_follows_input() {
        let cell = CellConstants::cubic(12.0).unwrap();
        let vectors: Vec<Vector3<f64>> = (1..=4).map(|n| Vector3::new(0.0, n as f64, 0.0)).collect();
        let d = compute_resolution(100, &cell, &vectors);
        for (n, d_n) in (1..=4).zip(&d) {
            assert_relative_eq!(*d_n, 12.0 / n as f64, epsilon = 1e-12);
        }
    }

    // ==================== Hexagonal cells ====================

    #[test]
    fn test_hexagonal_cell() {
        let cell = CellConstants::new(5.0, 5.0, 10.0, 90.0, 90.0, 120.0).unwrap();
        let d = compute_resolution(
            180,
            &cell,
            &[Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 2.0), Vector3::new(1.0, -1.0, 0.0)],
        );
        assert_relative_eq!(d[0], 5.0 * 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_relative_eq!(d[1], 5.0, epsilon = 1e-12);
        // (1, -1, 0) is equivalent to (1, 0, 0) in hexagonal axes
        assert_relative_eq!(d[2], d[0], epsilon = 1e-12);
    }

    #[test]
    fn test_trigonal_groups_need_opt_in() {
        let cell = CellConstants::new(5.0, 5.0, 10.0, 90.0, 90.0, 120.0).unwrap();
        let vectors = [Vector3::new(1.0, 0.0, 0.0)];

        assert!(compute_resolution(150, &cell, &vectors).is_empty());

        let calculator = ResolutionCalculator::new(SpaceGroupTable::default().with_trigonal());
        let d = calculator.compute(150, &cell, &vectors);
        assert_relative_eq!(d[0], 5.0 * 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
    }

    // ==================== Monoclinic cells ====================

    #[test]
    fn test_monoclinic_reduces_to_orthogonal_at_right_angle() {
        let cell = CellConstants::new(10.0, 12.0, 14.0, 90.0, 90.0, 90.0).unwrap();
        let hkl = Vector3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(
            inverse_d_spacing(CrystalFamily::Monoclinic, &cell, &hkl),
            inverse_d_spacing(CrystalFamily::Orthogonal, &cell, &hkl),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_monoclinic_cell() {
        let beta: f64 = 100.0;
        let (a, c) = (10.0, 14.0);
        let cell = CellConstants::new(a, 12.0, c, 90.0, beta, 90.0).unwrap();
        let d = compute_resolution(
            4,
            &cell,
            &[Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, 1.0)],
        );

        let (s, co) = (beta.to_radians().sin(), beta.to_radians().cos());
        assert_relative_eq!(d[0], a * s, epsilon = 1e-12);
        assert_relative_eq!(d[1], c * s, epsilon = 1e-12);
        let inv_d2 = 1.0 / (a * a * s * s) + 1.0 / (c * c * s * s) + 2.0 * co / (a * c * s * s);
        assert_relative_eq!(d[2], 1.0 / inv_d2.sqrt(), epsilon = 1e-12);
    }

    // ==================== Unsupported groups ====================

    #[test]
    fn test_unsupported_space_group_returns_empty() {
        let cell = CellConstants::cubic(10.0).unwrap();
        let d = compute_resolution(1, &cell, &[Vector3::new(1.0, 0.0, 0.0)]);
        assert!(d.is_empty());
    }

    #[test]
    fn test_try_compute_reports_unsupported_group() {
        let cell = CellConstants::cubic(10.0).unwrap();
        let result = ResolutionCalculator::default().try_compute(1, &cell, &[]);
        assert_eq!(result, Err(DiffuseError::UnsupportedSpaceGroup(1)));
    }

    #[test]
    fn test_default_table_boundaries() {
        let table = SpaceGroupTable::default();
        let cases = [
            (2, None),
            (3, Some(CrystalFamily::Monoclinic)),
            (15, Some(CrystalFamily::Monoclinic)),
            (16, Some(CrystalFamily::Orthogonal)),
            (142, Some(CrystalFamily::Orthogonal)),
            (143, None),
            (167, None),
            (168, Some(CrystalFamily::Hexagonal)),
            (194, Some(CrystalFamily::Hexagonal)),
            (195, Some(CrystalFamily::Orthogonal)),
            (230, Some(CrystalFamily::Orthogonal)),
            (231, None),
        ];
        for (space_group, family) in cases {
            assert_eq!(table.classify(space_group), family, "space group {}", space_group);
        }
    }

    #[test]
    fn test_table_from_json() {
        let json = r#"{"rules": [{"first": 143, "last": 194, "family": "Hexagonal"}]}"#;
        let table: SpaceGroupTable = serde_json::from_str(json).unwrap();
        assert_eq!(
            table.rules(),
            &[SpaceGroupRange::new(143, 194, CrystalFamily::Hexagonal)]
        );
        assert_eq!(table.classify(150), Some(CrystalFamily::Hexagonal));
        assert_eq!(table.classify(200), None);
    }

    // ==================== Input validation ====================

    #[test]
    fn test_cell_constants_from_slice() {
        let cell = CellConstants::from_slice(&[1.0, 2.0, 3.0, 90.0, 95.0, 90.0]).unwrap();
        assert_eq!(cell.as_array(), [1.0, 2.0, 3.0, 90.0, 95.0, 90.0]);

        assert_eq!(
            CellConstants::from_slice(&[1.0, 2.0, 3.0, 90.0, 90.0]),
            Err(DiffuseError::ShapeMismatch {
                what: "cell constants",
                expected: 6,
                actual: 5,
            })
        );
    }

    #[test]
    fn test_invalid_cell_constants() {
        assert_eq!(
            CellConstants::new(-1.0, 2.0, 3.0, 90.0, 90.0, 90.0),
            Err(DiffuseError::InvalidCellConstant { name: "a", value: -1.0 })
        );
        assert_eq!(
            CellConstants::new(1.0, 2.0, 3.0, 90.0, 180.0, 90.0),
            Err(DiffuseError::InvalidCellAngle { name: "beta", value: 180.0 })
        );
        assert_eq!(
            CellConstants::new(1.0, 2.0, 3.0, 0.0, 90.0, 90.0),
            Err(DiffuseError::InvalidCellAngle { name: "alpha", value: 0.0 })
        );
    }

    #[test]
    fn test_angle_errors_name_the_angle_range() {
        let err = CellConstants::cubic(10.0)
            .and_then(|cell| CellConstants::new(cell.a, cell.b, cell.c, 90.0, 90.0, 200.0))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("gamma"));
        assert!(message.contains("between 0 and 180 degrees"));
        assert!(!message.contains("positive"));
    }

    #[test]
    fn test_scattering_vectors_from_flat() {
        let vectors = scattering_vectors_from_flat(&[1.0, 2.0, 3.0, -1.0, 0.0, 0.5]).unwrap();
        assert_eq!(vectors, vec![Vector3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, 0.0, 0.5)]);
        assert!(matches!(
            scattering_vectors_from_flat(&[1.0, 2.0]),
            Err(DiffuseError::ShapeMismatch { actual: 2, .. })
        ));
    }
}
