//! Supports loading platform designs from YAML files (optional)

use std::path::Path;

use serde::Deserialize;

use crate::parameter_error::ParameterError;
use crate::parameters::DesignParameters;

#[derive(Deserialize)]
struct Root {
    #[serde(rename = "spikm_design_parameters")]
    design: DesignParameters,
}

impl DesignParameters {
    /// Read a platform design from a YAML file like this:
    /// ```yaml
    /// # Reference rig
    /// spikm_design_parameters:
    ///   platform_center_length: 10.0
    ///   platform_edge_length: 8.0
    ///   crank_length: 5.0
    ///   crank_start_angle: 0.0
    ///   link_length: 12.0
    ///   assembly_angle: 30.0
    ///   assembly_offset: 2.0
    ///   plane_offset: 4.0
    /// ```
    /// All eight fields are required; angles are given in degrees. The design
    /// is validated before it is returned.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a platform design from YAML text. Accepts the same document
    /// layout as [DesignParameters::from_yaml_file] and round-trips with
    /// [DesignParameters::to_yaml].
    pub fn from_yaml(text: &str) -> Result<Self, ParameterError> {
        let root: Root = serde_saphyr::from_str(text)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        root.design.validate()?;
        Ok(root.design)
    }
}
