// Thin CLI over the library: load the four weight and bias files at the
// fixed shapes, load a raw 28x28 float image, classify it.

use std::process::ExitCode;

use mlp_digits::io::load_matrix;
use mlp_digits::{Matrix, MlpNetwork, Result, BIAS_DIMS, IMAGE_DIMS, MLP_SIZE, WEIGHT_DIMS};

const USAGE: &str = "usage: mlp-digits <w1> <w2> <w3> <w4> <b1> <b2> <b3> <b4> <image>";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 * MLP_SIZE + 1 {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let mut weights = Vec::with_capacity(MLP_SIZE);
    let mut biases = Vec::with_capacity(MLP_SIZE);
    for i in 0..MLP_SIZE {
        weights.push(load_matrix(&args[i], WEIGHT_DIMS[i].rows, WEIGHT_DIMS[i].cols)?);
        biases.push(load_matrix(&args[MLP_SIZE + i], BIAS_DIMS[i].rows, BIAS_DIMS[i].cols)?);
    }

    let mut image = load_matrix(&args[2 * MLP_SIZE], IMAGE_DIMS.rows, IMAGE_DIMS.cols)?;
    println!("Image processed:\n{}", image);
    image.vectorize();

    let network = MlpNetwork::new(to_array(weights), to_array(biases));
    let result = network.apply(image)?;
    println!("Mlp result: {} at probability: {}", result.value, result.probability);
    Ok(())
}

fn to_array(matrices: Vec<Matrix>) -> [Matrix; MLP_SIZE] {
    match matrices.try_into() {
        Ok(arr) => arr,
        // Length is MLP_SIZE by construction in run().
        Err(_) => unreachable!(),
    }
}
