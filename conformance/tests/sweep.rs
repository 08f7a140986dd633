//! End-to-end sweeps through the public conformance surface.

use affine_plane::ModulusPolicy;
use affine_plane_conformance::{run_all, ConformanceReport, Severity, SweepConfig};

fn severities_for(report: &ConformanceReport, q: u64) -> Vec<(String, Severity)> {
    report
        .for_modulus(q)
        .map(|r| (r.validator.clone(), r.severity))
        .collect()
}

#[test]
fn q4_unchecked_flags_unsound_arithmetic() {
    let config = SweepConfig {
        moduli: vec![4],
        policy: ModulusPolicy::Unchecked,
    };
    let report = run_all(&config);

    assert_eq!(
        severities_for(&report, 4),
        vec![
            ("modulus".to_string(), Severity::Warning),
            ("field/inverse".to_string(), Severity::Failure),
            ("lines/count".to_string(), Severity::Pass),
            ("lines/normalization".to_string(), Severity::Failure),
            ("classes/parallel".to_string(), Severity::Pass),
        ]
    );
    assert_eq!(report.failure_count(), 2);
}

#[test]
fn q4_prime_only_is_skipped() {
    let config = SweepConfig {
        moduli: vec![4, 5],
        policy: ModulusPolicy::PrimeOnly,
    };
    let report = run_all(&config);

    assert_eq!(
        severities_for(&report, 4),
        vec![("modulus".to_string(), Severity::Warning)]
    );
    assert_eq!(report.for_modulus(5).count(), 5);
    assert!(report.all_passed());
}

#[test]
fn invalid_modulus_fails_and_sweep_continues() {
    let config = SweepConfig {
        moduli: vec![0, 1, 3],
        policy: ModulusPolicy::Unchecked,
    };
    let report = run_all(&config);

    assert_eq!(report.failure_count(), 2);
    assert!(report.for_modulus(3).all(|r| r.severity == Severity::Pass));
}

#[test]
fn every_prime_in_harness_list_conforms() {
    let config = SweepConfig {
        moduli: vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31],
        policy: ModulusPolicy::PrimeOnly,
    };
    let report = run_all(&config);
    let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
    assert!(failures.is_empty(), "failures: {:#?}", failures);
}

#[test]
fn repeated_sweeps_are_identical() {
    let config = SweepConfig {
        moduli: vec![6, 7],
        policy: ModulusPolicy::Unchecked,
    };
    let first = run_all(&config).to_json().ok();
    let second = run_all(&config).to_json().ok();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn loads_config_file() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("affine-plane-sweep-{}.toml", std::process::id()));
    std::fs::write(&path, "moduli = [3, 9]\npolicy = \"unchecked\"\n")?;

    let config = SweepConfig::load(&path);
    std::fs::remove_file(&path)?;

    assert_eq!(
        config?,
        SweepConfig {
            moduli: vec![3, 9],
            policy: ModulusPolicy::Unchecked,
        }
    );
    Ok(())
}

#[test]
fn missing_config_file_is_an_error() {
    let path = std::env::temp_dir().join("affine-plane-does-not-exist.toml");
    let err = SweepConfig::load(&path).err().map(|e| e.to_string());
    assert!(err.is_some_and(|msg| msg.starts_with("Failed to read")));
}
