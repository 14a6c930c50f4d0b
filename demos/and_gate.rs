use simpletron::Perceptron;

fn main() {
    tracing_subscriber::fmt().init();

    let mut unit = Perceptron::new(2).expect("two features");

    // AND gate: four samples flattened into one sequence, one label each.
    let x = vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0];
    let y = vec![0.0, 0.0, 0.0, 1.0];

    for sweep in 0..50 {
        let history = unit.fit(&x, &y, false).expect("well-formed training data");
        let last = history.last().copied().unwrap_or(1.0);
        if last == 0.0 {
            println!("Converged after sweep {sweep}.");
            break;
        }
        if sweep % 10 == 0 {
            println!("Sweep {sweep}: loss = {last:.4}");
        }
    }

    // One more sweep with verbose reporting to show the per-epoch lines.
    unit.fit(&x, &y, true).expect("well-formed training data");

    for sample in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
        let out = unit.predict(&sample).expect("two inputs");
        println!("Input: {sample:?} -> Output: {out}");
    }
}
