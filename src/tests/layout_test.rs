#[cfg(test)]
mod tests {
    use nalgebra::Point3;

    use crate::layout::{generate_shape, SHAPE_POINTS};
    use crate::parameters::DesignParameters;
    use crate::rotations::rotate_z_deg;

    const SMALL: f64 = 1e-12;

    #[test]
    fn outline_is_closed_and_flat() {
        let design = DesignParameters::reference_rig();
        let shape = generate_shape(&design);

        assert_eq!(shape.len(), SHAPE_POINTS);
        assert_eq!(shape[0], shape[6], "outline must close for drawing");
        assert!(shape.iter().all(|point| point.z == 0.0));

        // The first edge is centered on the y axis.
        assert_eq!(shape[0], Point3::new(-4.0, 10.0, 0.0));
        assert_eq!(shape[1], Point3::new(4.0, 10.0, 0.0));
        let edge = (shape[1] - shape[0]).norm();
        assert!((edge - design.platform_edge_length).abs() < SMALL);
    }

    #[test]
    fn edges_repeat_a_third_of_a_turn_apart() {
        let design = DesignParameters::reference_rig();
        let shape = generate_shape(&design);

        for (source, target, angle) in
            [(0, 2, -120.0), (1, 3, -120.0), (0, 4, 120.0), (1, 5, 120.0)]
        {
            let rotated = rotate_z_deg(angle) * shape[source];
            assert!(
                (rotated - shape[target]).norm() < SMALL,
                "point {} is not point {} turned by {} degrees",
                target,
                source,
                angle
            );
        }
    }

    #[test]
    fn all_corners_sit_on_the_circumscribed_circle() {
        let design = DesignParameters::compact_rig();
        let shape = generate_shape(&design);
        let radius = (design.platform_center_length * design.platform_center_length
            + design.platform_edge_length * design.platform_edge_length / 4.0)
            .sqrt();

        for point in shape.iter() {
            assert!((point.coords.norm() - radius).abs() < SMALL);
        }
    }
}
