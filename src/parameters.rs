//! Defines the platform design parameter data structure

use serde::{Deserialize, Serialize};

use crate::parameter_error::ParameterError;

/// Parameters of a platform design. Eight lengths and angles describe the
/// whole rig; all six actuators are built alike. See
/// [crate::parameters_platforms] for concrete rigs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
    /// Distance from the platform centre to each of the three mounting edges.
    pub platform_center_length: f64,

    /// Length of each mounting edge; a pair of nodes sits on its ends.
    pub platform_edge_length: f64,

    /// Length of the crank arm, from the motor shaft to the crank pin.
    pub crank_length: f64,

    /// Crank angle at the home pose, degrees within [-90, 90]; 0 is horizontal.
    pub crank_start_angle: f64,

    /// Length of the connecting rod between the crank pin and the platform node.
    pub link_length: f64,

    /// Angle between the crank rotation plane and the mounting edge it serves,
    /// in degrees. Odd actuators mount mirrored, so their planes use the
    /// negated value.
    pub assembly_angle: f64,

    /// Lateral offset between the crank plane and the node the rod drives.
    pub assembly_offset: f64,

    /// Vertical offset between the platform plane and the motor shafts at the
    /// home pose.
    pub plane_offset: f64,
}

impl DesignParameters {
    /// Check the design before anything is built from it. Returns the first
    /// violation found.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in [
            ("platform_center_length", self.platform_center_length),
            ("platform_edge_length", self.platform_edge_length),
            ("crank_length", self.crank_length),
            ("crank_start_angle", self.crank_start_angle),
            ("link_length", self.link_length),
            ("assembly_angle", self.assembly_angle),
            ("assembly_offset", self.assembly_offset),
            ("plane_offset", self.plane_offset),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite(name.to_string()));
            }
        }
        for (name, value) in [
            ("platform_center_length", self.platform_center_length),
            ("platform_edge_length", self.platform_edge_length),
            ("crank_length", self.crank_length),
            ("link_length", self.link_length),
            ("plane_offset", self.plane_offset),
        ] {
            if value <= 0.0 {
                return Err(ParameterError::NonPositive(name.to_string()));
            }
        }
        if !(-90.0..=90.0).contains(&self.crank_start_angle) {
            return Err(ParameterError::WrongAngle(format!(
                "crank_start_angle must be within [-90, 90] degrees (got {})",
                self.crank_start_angle
            )));
        }
        if !(-90.0..=90.0).contains(&self.assembly_angle) {
            return Err(ParameterError::WrongAngle(format!(
                "assembly_angle must be within [-90, 90] degrees (got {})",
                self.assembly_angle
            )));
        }
        Ok(())
    }

    /// Convert to string yaml representation (quick viewing, saving designs).
    /// Scalars are written with a decimal point so they read back as floats.
    pub fn to_yaml(&self) -> String {
        format!(
            "spikm_design_parameters:\n  \
           platform_center_length: {:?}\n  \
           platform_edge_length: {:?}\n  \
           crank_length: {:?}\n  \
           crank_start_angle: {:?}\n  \
           link_length: {:?}\n  \
           assembly_angle: {:?}\n  \
           assembly_offset: {:?}\n  \
           plane_offset: {:?}\n",
            self.platform_center_length,
            self.platform_edge_length,
            self.crank_length,
            self.crank_start_angle,
            self.link_length,
            self.assembly_angle,
            self.assembly_offset,
            self.plane_offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter_error::ParameterError;

    #[test]
    fn accepts_the_reference_rig() {
        assert!(DesignParameters::reference_rig().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_lengths() {
        let mut design = DesignParameters::reference_rig();
        design.link_length = 0.0;
        match design.validate() {
            Err(ParameterError::NonPositive(field)) => assert_eq!(field, "link_length"),
            other => panic!("expected NonPositive, got {:?}", other),
        }
    }

    #[test]
    fn rejects_nan_fields() {
        let mut design = DesignParameters::reference_rig();
        design.assembly_offset = f64::NAN;
        match design.validate() {
            Err(ParameterError::NotFinite(field)) => assert_eq!(field, "assembly_offset"),
            other => panic!("expected NotFinite, got {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_angles() {
        let mut design = DesignParameters::reference_rig();
        design.crank_start_angle = 91.0;
        assert!(matches!(
            design.validate(),
            Err(ParameterError::WrongAngle(_))
        ));

        let mut design = DesignParameters::reference_rig();
        design.assembly_angle = -120.0;
        assert!(matches!(
            design.validate(),
            Err(ParameterError::WrongAngle(_))
        ));
    }
}
