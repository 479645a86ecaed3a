#[cfg(test)]
mod _tests_grid {
    use super::super::bins::Bins;
    use super::super::reciprocal_mesh::{projection_mesh, reciprocal_axes, Projection};
    use super::super::voxel_grid::VoxelGrid;
    use crate::error::DiffuseError;
    use crate::interfaces::Axis;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};
    use std::f64::consts::PI;

    fn uneven_bins() -> Bins {
        Bins::new(
            vec![-1.0, 0.0, 1.0],
            vec![-1.5, -0.5, 0.5, 1.5],
            vec![-2.0, -1.0, 0.0, 1.0, 2.0],
        )
        .unwrap()
    }

    // ==================== Bins ====================

    #[test]
    fn test_centered_bins() {
        let bins = Bins::centered(3, 2).unwrap();
        let h = bins.axis(Axis::H);
        assert_eq!(h.len(), 13);
        assert_relative_eq!(h[0], -3.0);
        assert_relative_eq!(h[1], -2.5);
        assert_relative_eq!(h[6], 0.0);
        assert_relative_eq!(h[12], 3.0);
        assert_eq!(bins.shape(), [13, 13, 13]);
    }

    #[test]
    fn test_centered_bins_rejects_zero_subsampling() {
        assert_eq!(
            Bins::centered(3, 0),
            Err(DiffuseError::InvalidSubsampling(0.0))
        );
    }

    #[test]
    fn test_centered_bins_reject_overflowing_size() {
        assert_eq!(
            Bins::centered(u32::MAX, u32::MAX),
            Err(DiffuseError::GridTooLarge {
                max_index: u32::MAX,
                subsampling: u32::MAX,
            })
        );
    }

    #[test]
    fn test_empty_axis_is_rejected() {
        let result = Bins::new(vec![0.0], vec![], vec![0.0]);
        assert_eq!(result, Err(DiffuseError::EmptyAxis(Axis::K)));
    }

    #[test]
    fn test_non_finite_bin_is_rejected() {
        let result = Bins::new(vec![0.0], vec![0.0], vec![0.0, f64::NAN]);
        assert_eq!(
            result,
            Err(DiffuseError::NonFiniteBin {
                axis: Axis::L,
                position: 1
            })
        );
    }

    #[test]
    fn test_extent_and_platform() {
        let bins = Bins::new(vec![-4.0, -3.0], vec![0.0, 1.0, 2.0], vec![1.0]).unwrap();
        assert_eq!(bins.extent(), 3);
        // Largest magnitude wins even when it is negative
        assert_relative_eq!(bins.platform(), 4.0);
    }

    #[test]
    fn test_bins_deserialize_from_axis_keys() {
        let json = r#"{"h": [-1.0, 0.0, 1.0], "k": [0.0], "l": [0.5, 1.5]}"#;
        let bins: Bins = serde_json::from_str(json).unwrap();
        assert!(bins.validate().is_ok());
        assert_eq!(bins.shape(), [3, 1, 2]);
    }

    // ==================== VoxelGrid ====================

    #[test]
    fn test_grid_size_is_product_of_axes() {
        let grid = VoxelGrid::new(&uneven_bins()).unwrap();
        assert_eq!(grid.len(), 3 * 4 * 5);
        assert_eq!(grid.shape(), [3, 4, 5]);
        assert_eq!(grid.extent(), 5);
        assert_relative_eq!(grid.platform(), 2.0);
    }

    #[test]
    fn test_grid_order_has_l_fastest() {
        let grid = VoxelGrid::new(&uneven_bins()).unwrap();
        let v = grid.vectors();
        assert_eq!(v[0], Vector3::new(-1.0, -1.5, -2.0));
        assert_eq!(v[1], Vector3::new(-1.0, -1.5, -1.0));
        assert_eq!(v[5], Vector3::new(-1.0, -0.5, -2.0));
        assert_eq!(v[20], Vector3::new(0.0, -1.5, -2.0));
        assert_eq!(v[59], Vector3::new(1.0, 1.5, 2.0));
    }

    #[test]
    fn test_flat_index_round_trip() {
        let grid = VoxelGrid::new(&uneven_bins()).unwrap();
        let bins = grid.bins().clone();
        for (i, v) in grid.vectors().iter().enumerate() {
            let [ih, ik, il] = grid.axis_indices(i);
            assert_eq!(grid.flat_index(ih, ik, il), i);
            assert_eq!(bins.axis(Axis::H)[ih], v.x);
            assert_eq!(bins.axis(Axis::K)[ik], v.y);
            assert_eq!(bins.axis(Axis::L)[il], v.z);
        }
    }

    #[test]
    fn test_cube_ravel_matches_grid_order_for_cubic_bins() {
        let grid = VoxelGrid::new(&Bins::centered(2, 1).unwrap()).unwrap();
        for i in 0..grid.len() {
            let coordinate = grid.unravel_cube(i);
            assert_eq!(coordinate, grid.axis_indices(i));
            assert_eq!(grid.ravel_cube(coordinate), i);
        }
    }

    // ==================== Reciprocal mesh ====================

    #[test]
    fn test_reciprocal_axes_scale_by_inverse_diagonal() {
        let a = Matrix3::from_diagonal(&Vector3::new(0.1, 0.2, 0.25));
        let bins = Bins::new(vec![1.0, 2.0], vec![1.0], vec![-1.0]).unwrap();
        let axes = reciprocal_axes(&a, &bins).unwrap();

        assert_relative_eq!(axes.q_h[0], 2.0 * PI * 10.0, epsilon = 1e-9);
        assert_relative_eq!(axes.q_h[1], 2.0 * PI * 20.0, epsilon = 1e-9);
        assert_relative_eq!(axes.q_k[0], 2.0 * PI * 5.0, epsilon = 1e-9);
        assert_relative_eq!(axes.q_l[0], -2.0 * PI * 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_projection_mesh_follows_meshgrid_layout() {
        let bins = uneven_bins();
        let mesh = projection_mesh(&Matrix3::identity(), &bins, Projection::Z).unwrap();

        // Z: columns follow k (4 bins), rows follow h (3 bins)
        assert_eq!(mesh.x.len(), 3);
        assert_eq!(mesh.x[0].len(), 4);
        assert_eq!(mesh.y.len(), 3);
        assert_relative_eq!(mesh.x[2][3], 2.0 * PI * 1.5, epsilon = 1e-9);
        assert_relative_eq!(mesh.y[2][3], 2.0 * PI * 1.0, epsilon = 1e-9);
        assert_relative_eq!(mesh.y[0][1], -2.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn test_singular_orientation_matrix() {
        let result = reciprocal_axes(&Matrix3::zeros(), &uneven_bins());
        assert_eq!(result, Err(DiffuseError::SingularMatrix));
    }
}
