#[cfg(test)]
mod _tests_symmetrize {
    use super::super::symmetrize::{symmetrize, symmetrize_with};
    use crate::error::DiffuseError;
    use crate::grid::{Bins, VoxelGrid};
    use crate::interfaces::SymmetrizeMode;
    use crate::symmetries::{
        generate_symmetry_indices, laue_group_operators, LaueClass, SymmetryIndexTable,
        SymmetryOperation, SymmetryOperatorSet,
    };
    use approx::assert_relative_eq;
    use nalgebra::Matrix3;

    // Flat position of (h, k, l) in Bins::centered(2, 1)
    fn voxel(h: i32, k: i32, l: i32) -> usize {
        ((h + 2) * 25 + (k + 2) * 5 + (l + 2)) as usize
    }

    fn table_for(class: LaueClass) -> (SymmetryIndexTable, VoxelGrid) {
        let bins = Bins::centered(2, 1).unwrap();
        generate_symmetry_indices(&laue_group_operators(class), &bins, 1.0).unwrap()
    }

    // ==================== Unit-cell mode ====================

    #[test]
    fn test_shape_mismatch_is_reported() {
        let (table, _) = table_for(LaueClass::Triclinic);
        let result = symmetrize(&[1.0; 10], &table, false);
        assert_eq!(
            result,
            Err(DiffuseError::ShapeMismatch {
                what: "intensity map",
                expected: 125,
                actual: 10,
            })
        );
    }

    #[test]
    fn test_identity_reproduces_map() {
        let bins = Bins::centered(2, 1).unwrap();
        let operators = SymmetryOperatorSet::new(vec![SymmetryOperation::identity()]).unwrap();
        let (table, _) = generate_symmetry_indices(&operators, &bins, 1.0).unwrap();

        let map: Vec<f64> = (0..125).map(|i| (i % 7) as f64).collect();
        assert_eq!(symmetrize(&map, &table, false).unwrap(), map);
    }

    #[test]
    fn test_symmetric_map_is_unchanged() {
        let (table, grid) = table_for(LaueClass::Orthorhombic);
        let map: Vec<f64> = grid
            .vectors()
            .iter()
            .map(|v| 1.0 + v.x * v.x + 2.0 * v.y * v.y + 3.0 * v.z * v.z)
            .collect();

        let symmetrized = symmetrize(&map, &table, false).unwrap();
        for (a, b) in symmetrized.iter().zip(&map) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_equivalents_are_averaged() {
        let (table, _) = table_for(LaueClass::Orthorhombic);
        let mut map = vec![0.0; 125];
        map[voxel(1, 0, 0)] = 2.0;
        map[voxel(-1, 0, 0)] = 6.0;

        let symmetrized = symmetrize(&map, &table, false).unwrap();
        assert_relative_eq!(symmetrized[voxel(1, 0, 0)], 4.0);
        assert_relative_eq!(symmetrized[voxel(-1, 0, 0)], 4.0);
    }

    #[test]
    fn test_zeros_count_as_missing() {
        let (table, _) = table_for(LaueClass::Orthorhombic);
        let mut map = vec![0.0; 125];
        map[voxel(1, 0, 0)] = 4.0;

        let symmetrized = symmetrize(&map, &table, false).unwrap();
        // The missing Friedel-related voxel is filled, not diluted
        assert_relative_eq!(symmetrized[voxel(1, 0, 0)], 4.0);
        assert_relative_eq!(symmetrized[voxel(-1, 0, 0)], 4.0);
        // Voxels with no measured equivalent stay zero
        assert_eq!(symmetrized[voxel(0, 1, 0)], 0.0);
        assert_eq!(symmetrized.iter().filter(|&&x| x != 0.0).count(), 2);
    }

    #[test]
    fn test_input_is_left_untouched() {
        let (table, grid) = table_for(LaueClass::TetragonalLow);
        let map: Vec<f64> = (0..grid.len()).map(|i| i as f64).collect();
        let copy = map.clone();

        let first = symmetrize(&map, &table, false).unwrap();
        let second = symmetrize(&map, &table, false).unwrap();
        assert_eq!(map, copy);
        assert_eq!(first, second);
    }

    // ==================== ASU mode ====================

    #[test]
    fn test_asu_sums_proper_equivalents_only() {
        let (table, _) = table_for(LaueClass::Orthorhombic);
        let mut map = vec![0.0; 125];
        map[voxel(1, 2, 1)] = 5.0;

        let symmetrized = symmetrize(&map, &table, true).unwrap();
        assert_eq!(symmetrized[voxel(1, 2, 1)], 5.0);
        assert_eq!(symmetrized[voxel(-1, -2, 1)], 5.0);
        assert_eq!(symmetrized[voxel(-1, 2, -1)], 5.0);
        assert_eq!(symmetrized[voxel(1, -2, -1)], 5.0);
        // Friedel mate of the input voxel is not generated
        assert_eq!(symmetrized[voxel(-1, -2, -1)], 0.0);
        assert_relative_eq!(symmetrized.iter().sum::<f64>(), 20.0);
    }

    #[test]
    fn test_asu_mode_sums_without_averaging() {
        let (table, _) = table_for(LaueClass::Orthorhombic);
        let map = vec![1.0; 125];

        let summed = symmetrize_with(&map, &table, SymmetrizeMode::AsymmetricUnit).unwrap();
        let averaged = symmetrize_with(&map, &table, SymmetrizeMode::UnitCell).unwrap();
        assert!(summed.iter().all(|&x| x == 4.0));
        assert!(averaged.iter().all(|&x| x == 1.0));
    }

    #[test]
    fn test_asu_mode_follows_explicit_flags() {
        // Friedel mate listed first: only the identity contributes
        let operators = SymmetryOperatorSet::new(vec![
            SymmetryOperation::new(-Matrix3::identity(), true),
            SymmetryOperation::identity(),
        ])
        .unwrap();
        let bins = Bins::centered(2, 1).unwrap();
        let (table, _) = generate_symmetry_indices(&operators, &bins, 1.0).unwrap();

        let mut map = vec![0.0; 125];
        map[voxel(2, 1, 0)] = 3.0;
        let symmetrized = symmetrize(&map, &table, true).unwrap();
        assert_eq!(symmetrized, map);
    }
}
