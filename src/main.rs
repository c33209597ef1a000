// The binary only demonstrates the library. Set RUST_LOG=debug to see
// construction details, or pass a path to a JSON network spec:
//   cargo run -- spec.json
use ferrite_infer::{NetworkSpec, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let spec = match std::env::args().nth(1) {
        Some(path) => NetworkSpec::load_json(&path)?,
        None => NetworkSpec {
            layer_sizes: vec![2, 3, 2],
            activation: "relu".to_owned(),
            vectorized: true,
            seed: Some(0),
        },
    };

    let network = spec.build()?;
    let input: Vec<f64> = (0..network.input_size())
        .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect();
    let output = network.forward(&input)?;

    println!("ferrite-infer: {network}");
    println!("Input: {input:?} -> Output: {output:.5?}");
    Ok(())
}
