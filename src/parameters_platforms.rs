//! Hardcoded design parameters for a few platform rigs

use crate::parameters::DesignParameters;

impl Default for DesignParameters {
    /// The reference rig; the design a fresh session starts from.
    fn default() -> Self {
        DesignParameters::reference_rig()
    }
}

#[allow(dead_code)]
impl DesignParameters {
    /// Desk-scale rig used throughout the documentation and tests.
    pub fn reference_rig() -> Self {
        DesignParameters {
            platform_center_length: 10.0,
            platform_edge_length: 8.0,
            crank_length: 5.0,
            crank_start_angle: 0.0,
            link_length: 12.0,
            assembly_angle: 30.0,
            assembly_offset: 2.0,
            plane_offset: 4.0,
        }
    }

    /// Small rig with hobby servo proportions.
    pub fn compact_rig() -> Self {
        DesignParameters {
            platform_center_length: 6.0,
            platform_edge_length: 5.0,
            crank_length: 3.0,
            crank_start_angle: 0.0,
            link_length: 8.0,
            assembly_angle: 25.0,
            assembly_offset: 1.5,
            plane_offset: 3.0,
        }
    }

    /// Longer rods and cranks parked below horizontal, for more vertical travel.
    pub fn tall_rig() -> Self {
        DesignParameters {
            platform_center_length: 14.0,
            platform_edge_length: 10.0,
            crank_length: 6.0,
            crank_start_angle: -15.0,
            link_length: 16.0,
            assembly_angle: 35.0,
            assembly_offset: 2.5,
            plane_offset: 5.0,
        }
    }
}
