#[cfg(test)]
mod tests {
    use crate::parameter_error::ParameterError;
    use crate::parameters::DesignParameters;
    use crate::platform::PlatformKinematics;
    use crate::tests::test_utils::cases::{load_cases, DESIGN_CASES, DESIGNS};

    const READ_ERROR: &str = "Failed to load design from file";

    #[test]
    fn loads_a_design_file() {
        let filename = "src/tests/data/reference_rig.yaml";
        let loaded = DesignParameters::from_yaml_file(filename).expect(READ_ERROR);
        assert_eq!(loaded, DesignParameters::reference_rig());
    }

    #[test]
    fn yaml_round_trip() {
        for design in [
            DesignParameters::reference_rig(),
            DesignParameters::compact_rig(),
            DesignParameters::tall_rig(),
        ] {
            let text = design.to_yaml();
            let parsed = DesignParameters::from_yaml(&text).expect("round trip parses");
            assert_eq!(parsed, design);
        }
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            DesignParameters::from_yaml("not yaml: ["),
            Err(ParameterError::ParseError(_))
        ));

        // Fields cannot be missing.
        let partial = "spikm_design_parameters:\n  crank_length: 5.0\n";
        assert!(DesignParameters::from_yaml(partial).is_err());

        // Well formed but impossible designs are caught by validation.
        let negative = DesignParameters::reference_rig()
            .to_yaml()
            .replace("crank_length: 5.0", "crank_length: -5.0");
        assert!(matches!(
            DesignParameters::from_yaml(&negative),
            Err(ParameterError::NonPositive(_))
        ));
    }

    #[test]
    fn loads_the_design_cases() {
        let result = load_cases(DESIGNS);
        if let Err(e) = &result {
            println!("Error loading or parsing YAML file: {}", e);
        }
        assert!(result.is_ok(), "Failed to load or parse the YAML file");
        assert!(!result.expect(READ_ERROR).is_empty(), "No cases were loaded");
    }

    #[test]
    fn runs_the_probes_from_the_case_file() {
        for case in DESIGN_CASES.iter() {
            case.parameters
                .validate()
                .unwrap_or_else(|e| panic!("case [{}] does not validate: {}", case.name, e));
            let mut platform =
                PlatformKinematics::new(&case.parameters).expect("case builds");
            assert_eq!(
                platform.mount_feasible(),
                case.mountable,
                "mounting case [{}]",
                case.name
            );
            platform.initialize();

            for probe in case.probes.iter() {
                let result = platform.update(&probe.pose);
                assert_eq!(
                    result.is_feasible(),
                    probe.feasible,
                    "case [{}] at {:?}",
                    case.name,
                    probe.pose
                );
            }
        }
    }
}
