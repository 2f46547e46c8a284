//! Example walking a circuit through the deterministic simulator and then
//! distorting the ideal result with increasing noise, like running the
//! gates lab and the noise lab back to back.

use qulab::{CircuitBuilder, Gate, NoiseModel, QulabError, Simulator};

fn main() -> Result<(), QulabError> {
    println!("--- qulab Example: Circuit Fold + Noise Distortion ---");

    // H then X: the fold resets to 50 and the reflection keeps it there.
    let circuit = CircuitBuilder::new().add_gates([Gate::H, Gate::X]).build();
    println!("\nCircuit:\n{}", circuit);

    let outcome = Simulator::new().run(&circuit)?;
    println!("Ideal distribution: {}", outcome);

    let ideal = outcome.state0_percent() as f64;
    let mut rng = rand::rng();

    println!("\nNoise sweep (single perturbation draw per level):");
    for level in [0u8, 20, 50, 100] {
        let model = NoiseModel::new(level)?;
        let actual = model.perturb(ideal, &mut rng);
        let fidelity = NoiseModel::fidelity(ideal, actual);
        println!(
            "  level {:>3}%: actual |0⟩ = {:>5.1}%  fidelity = {:>5.1}",
            level, actual, fidelity
        );
    }

    println!("\nAt level 0 the output equals the ideal exactly; at level 100");
    println!("the distortion window spans ±50 points before clamping.");
    Ok(())
}
