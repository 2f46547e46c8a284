// tests/simulation_tests.rs

// Import necessary types from the qulab crate
use qulab::{
    Circuit, CircuitBuilder, ExperimentRunner, Gate, QubitState, QulabError, Simulator,
};

const TEST_TOLERANCE: f64 = 1e-9;

// Helper function to run a gate list through the simulator
fn run_gates(gates: &[Gate]) -> Result<(u8, u8), QulabError> {
    let circuit = CircuitBuilder::new().add_gates(gates.iter().copied()).build();
    let outcome = Simulator::new().run(&circuit)?;
    Ok((outcome.state0_percent(), outcome.state1_percent()))
}

#[test]
fn test_empty_circuit_reports_ground_state() -> Result<(), QulabError> {
    let simulator = Simulator::new();
    let outcome = simulator.run(&Circuit::new())?;
    assert_eq!(outcome.state0_percent(), 100);
    assert_eq!(outcome.state1_percent(), 0);
    Ok(())
}

#[test]
fn test_simulation_is_deterministic() -> Result<(), QulabError> {
    let circuit = CircuitBuilder::new().add_gates([Gate::H, Gate::X, Gate::Z]).build();
    let simulator = Simulator::new();
    let first = simulator.run(&circuit)?;
    for _ in 0..20 {
        assert_eq!(simulator.run(&circuit)?, first);
    }
    Ok(())
}

#[test]
fn test_probability_conservation_for_all_short_sequences() -> Result<(), QulabError> {
    // Every circuit of length <= 2 over the full palette must sum to
    // exactly 100; spot-check a few longer ones as well.
    let palette = [Gate::H, Gate::X, Gate::Y, Gate::Z, Gate::S, Gate::T];
    for &a in &palette {
        let (s0, s1) = run_gates(&[a])?;
        assert_eq!(s0 as u16 + s1 as u16, 100);
        for &b in &palette {
            let (s0, s1) = run_gates(&[a, b])?;
            assert_eq!(s0 as u16 + s1 as u16, 100);
        }
    }
    let (s0, s1) = run_gates(&[Gate::H, Gate::X, Gate::H, Gate::X, Gate::X])?;
    assert_eq!(s0 as u16 + s1 as u16, 100);
    Ok(())
}

#[test]
fn test_double_hadamard_scenario() -> Result<(), QulabError> {
    // H resets the fold to 50 both times: the lab shows 50/50, not the
    // textbook interference result.
    assert_eq!(run_gates(&[Gate::H, Gate::H])?, (50, 50));
    Ok(())
}

#[test]
fn test_single_x_scenario() -> Result<(), QulabError> {
    // The fold baseline is 50 for any non-empty circuit, so [X] lands
    // on 50/50 rather than flipping a ground state.
    assert_eq!(run_gates(&[Gate::X])?, (50, 50));
    Ok(())
}

#[test]
fn test_double_x_returns_to_baseline() -> Result<(), QulabError> {
    assert_eq!(run_gates(&[Gate::X, Gate::X])?, (50, 50));
    Ok(())
}

#[test]
fn test_gate_cap_excess_is_ignored() -> Result<(), QulabError> {
    // Seven gates requested; only the first five land, and the fold
    // result matches the five-gate prefix.
    let capped = CircuitBuilder::new()
        .add_gates([Gate::Z, Gate::Z, Gate::Z, Gate::Z, Gate::Z, Gate::X, Gate::X])
        .build();
    assert_eq!(capped.len(), 5);
    let outcome = Simulator::new().run(&capped)?;
    assert_eq!(outcome.state0_percent(), 50);
    Ok(())
}

#[test]
fn test_gate_angle_rules_match_lab_tables() {
    // H from ground lands on the equator at φ = π/2.
    let plus = Gate::H.apply(&QubitState::ground());
    assert!((plus.theta() - std::f64::consts::FRAC_PI_2).abs() < TEST_TOLERANCE);
    assert!((plus.phi() - std::f64::consts::FRAC_PI_2).abs() < TEST_TOLERANCE);

    // X from ground reaches the antipode: measurement certainty flips.
    let flipped = Gate::X.apply(&QubitState::ground());
    assert!((flipped.prob_one() - 1.0).abs() < TEST_TOLERANCE);

    // φ accumulates without wrapping under repeated Z.
    let mut state = QubitState::ground();
    for _ in 0..4 {
        state = Gate::Z.apply(&state);
    }
    assert!((state.phi() - 4.0 * std::f64::consts::PI).abs() < TEST_TOLERANCE);
    assert!(state.wrapped_phi().abs() < TEST_TOLERANCE);
}

#[test]
fn test_run_supersession_round_trip() -> Result<(), QulabError> {
    // A page kicks off a run, the user clicks again, the first result
    // arrives late: it must be refused.
    let mut runner = ExperimentRunner::new();
    let simulator = Simulator::new();

    let stale_token = runner.begin();
    let stale_outcome = simulator.run(&CircuitBuilder::new().add_gate(Gate::X).build())?;

    let fresh_token = runner.begin();
    let fresh_outcome = simulator.run(&CircuitBuilder::new().add_gate(Gate::H).build())?;

    let err = runner.complete(stale_token, stale_outcome).unwrap_err();
    assert!(matches!(err, QulabError::RunSuperseded { .. }));

    let delivered = runner.complete(fresh_token, fresh_outcome)?;
    assert_eq!(delivered.state0_percent(), 50);
    Ok(())
}
