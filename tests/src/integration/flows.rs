//! # Integration Test Flows
//!
//! One circuit through all three core subsystems:
//!
//! 1. **Circuit Builder (01)**: loose operation records → typed `Circuit`
//! 2. **State Evolution (02)**: `Circuit` → `StateVector`
//! 3. **Observables (03)**: `StateVector` → probabilities + Bloch vectors

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    use qs_01_circuit_builder::{CircuitBuilderApi, CircuitBuilderService, GateOperationRecord};
    use qs_02_state_evolution::{StateEvolutionApi, StateEvolutionEngine};
    use qs_03_observables::{ObservableExtractor, ObservableExtractorApi, Observables};
    use shared_types::{BlochVector, StateVector};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const EPS: f64 = 1e-9;

    fn op(kind: &str, target: i64) -> GateOperationRecord {
        GateOperationRecord::new(kind).with_target(target)
    }

    fn cnot(control: i64, target: i64) -> GateOperationRecord {
        GateOperationRecord::new("CNOT")
            .with_control(control)
            .with_target(target)
    }

    fn run(num_qubits: usize, operations: &[GateOperationRecord]) -> (StateVector, Observables) {
        let circuit = CircuitBuilderService::new().build(num_qubits, operations);
        let state = StateEvolutionEngine::new(num_qubits)
            .unwrap()
            .evolve(&circuit)
            .unwrap();
        let observables = ObservableExtractor::new().extract(&state);
        (state, observables)
    }

    fn assert_bloch(v: BlochVector, x: f64, y: f64, z: f64) {
        assert!(
            (v.x - x).abs() < EPS && (v.y - y).abs() < EPS && (v.z - z).abs() < EPS,
            "got ({}, {}, {}), want ({x}, {y}, {z})",
            v.x,
            v.y,
            v.z
        );
    }

    // =============================================================================
    // BASELINE STATES
    // =============================================================================

    #[test]
    fn test_empty_circuit_for_every_register_size() {
        for n in 1..=8 {
            let (_, observables) = run(n, &[]);
            let zeros = "0".repeat(n);

            assert_eq!(observables.probabilities.len(), 1 << n);
            for (label, p) in observables.probabilities.iter() {
                let expected = if label == zeros { 1.0 } else { 0.0 };
                assert!((p - expected).abs() < EPS, "n={n} label={label} p={p}");
            }
            assert_eq!(observables.bloch_vectors.len(), n);
            for v in observables.bloch_vectors {
                assert_bloch(v, 0.0, 0.0, 1.0);
            }
        }
    }

    #[test]
    fn test_single_hadamard() {
        let (_, observables) = run(1, &[op("H", 0)]);

        assert!((observables.probabilities.get("0").unwrap() - 0.5).abs() < EPS);
        assert!((observables.probabilities.get("1").unwrap() - 0.5).abs() < EPS);
        assert_bloch(observables.bloch_vectors[0], 1.0, 0.0, 0.0);
    }

    #[test]
    fn test_double_x_returns_to_zero() {
        let (_, observables) = run(1, &[op("X", 0), op("X", 0)]);
        assert_eq!(observables.probabilities.get("0"), Some(1.0));
        assert_eq!(observables.probabilities.get("1"), Some(0.0));
    }

    // =============================================================================
    // ENTANGLEMENT AND ORDERING
    // =============================================================================

    #[test]
    fn test_bell_state() {
        let (state, observables) = run(2, &[op("H", 0), cnot(0, 1)]);

        let p = &observables.probabilities;
        assert!((p.get("00").unwrap() - 0.5).abs() < EPS);
        assert!((p.get("11").unwrap() - 0.5).abs() < EPS);
        assert!(p.get("01").unwrap().abs() < EPS);
        assert!(p.get("10").unwrap().abs() < EPS);

        assert_bloch(observables.bloch_vectors[0], 0.0, 0.0, 0.0);
        assert_bloch(observables.bloch_vectors[1], 0.0, 0.0, 0.0);

        let nonzero: Vec<_> = state
            .amplitudes()
            .iter()
            .filter(|a| a.norm() > EPS)
            .collect();
        assert_eq!(nonzero.len(), 2);
        for a in nonzero {
            assert!((a.re - FRAC_1_SQRT_2).abs() < EPS);
            assert!(a.im.abs() < EPS);
        }
    }

    #[test]
    fn test_gate_order_matters() {
        // CNOT before H leaves the control in |0⟩, so nothing is entangled
        let (_, observables) = run(2, &[cnot(0, 1), op("H", 0)]);

        assert!((observables.probabilities.get("00").unwrap() - 0.5).abs() < EPS);
        assert!((observables.probabilities.get("10").unwrap() - 0.5).abs() < EPS);
        assert_bloch(observables.bloch_vectors[0], 1.0, 0.0, 0.0);
        assert_bloch(observables.bloch_vectors[1], 0.0, 0.0, 1.0);
    }

    #[test]
    fn test_label_puts_qubit_zero_first() {
        let (state, observables) = run(3, &[op("X", 0)]);

        assert_eq!(observables.probabilities.get("100"), Some(1.0));
        assert!((state.amplitudes()[1].re - 1.0).abs() < EPS);
        assert_bloch(observables.bloch_vectors[0], 0.0, 0.0, -1.0);
        assert_bloch(observables.bloch_vectors[2], 0.0, 0.0, 1.0);
    }

    // =============================================================================
    // ROTATIONS
    // =============================================================================

    #[test]
    fn test_rotations_trace_bloch_sphere() {
        let (_, observables) = run(1, &[op("RY", 0).with_angle(PI / 2.0)]);
        assert_bloch(observables.bloch_vectors[0], 1.0, 0.0, 0.0);

        let (_, observables) = run(1, &[op("RX", 0).with_angle(PI / 2.0)]);
        assert_bloch(observables.bloch_vectors[0], 0.0, -1.0, 0.0);

        let (_, observables) = run(1, &[op("H", 0), op("RZ", 0).with_angle(PI / 2.0)]);
        assert_bloch(observables.bloch_vectors[0], 0.0, 1.0, 0.0);
    }

    #[test]
    fn test_rz_keeps_global_phase() {
        let (state, _) = run(1, &[op("RZ", 0).with_angle(PI)]);
        let a0 = state.amplitudes()[0];
        assert!(a0.re.abs() < EPS);
        assert!((a0.im + 1.0).abs() < EPS);
    }

    #[test]
    fn test_rotation_prefix_names() {
        let canonical = run(2, &[op("RX", 1).with_angle(0.3)]).0;
        let prefixed = run(2, &[op("Rx_custom", 1).with_angle(0.3)]).0;
        assert_eq!(canonical, prefixed);
    }

    // =============================================================================
    // MALFORMED INPUT
    // =============================================================================

    #[test]
    fn test_malformed_operations_are_dropped() {
        let clean = [op("H", 0), cnot(0, 1)];
        let noisy = [
            GateOperationRecord::new("X"),
            op("H", 0),
            GateOperationRecord::default(),
            op("SWAP", 0),
            op("Y", 5),
            op("Z", -1),
            cnot(1, 1),
            GateOperationRecord::new("CNOT").with_target(1),
            cnot(0, 1),
        ];

        let (clean_state, clean_obs) = run(2, &clean);
        let (noisy_state, noisy_obs) = run(2, &noisy);
        assert_eq!(clean_state, noisy_state);
        assert_eq!(clean_obs, noisy_obs);
    }

    #[test]
    fn test_build_report_accounts_for_everything() {
        let records = [op("H", 0), GateOperationRecord::new("X"), op("Q", 0), op("X", 1)];
        let (circuit, report) = CircuitBuilderService::new().build_with_report(2, &records);

        assert_eq!(circuit.len(), 2);
        assert_eq!(report.applied, 2);
        assert_eq!(report.skipped_count(), 2);
        assert_eq!(report.skipped[0].position, 1);
        assert_eq!(report.skipped[1].position, 2);
    }

    #[test]
    fn test_engine_rejects_foreign_circuit() {
        let circuit = CircuitBuilderService::new().build(3, &[op("H", 2)]);
        let engine = StateEvolutionEngine::new(2).unwrap();
        assert!(engine.evolve(&circuit).is_err());
    }
}
