use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pipenet::{InitRng, Layer, Pipeline, TrainConfig};

/// Trains a small ReLU network on XOR and prints its decisions.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Number of passes over the four XOR samples
    #[arg(long, default_value_t = 10000)]
    epochs: usize,

    /// SGD step size
    #[arg(long, default_value_t = 0.01)]
    learning_rate: f64,

    /// Seed for weight initialization; unseeded when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Suppress the per-epoch loss line
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => InitRng::seeded(seed),
        None => InitRng::from_entropy(),
    };

    let mut network = Pipeline::new();
    network
        .add(Layer::dense_with_rng(2, 3, &mut rng))
        .add(Layer::relu())
        .add(Layer::dense_with_rng(3, 3, &mut rng))
        .add(Layer::relu())
        .add(Layer::dense_with_rng(3, 1, &mut rng))
        .add(Layer::sigmoid());

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let labels = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    let config = TrainConfig::new(args.epochs, args.learning_rate).with_verbose(!args.quiet);
    network.fit_with(&inputs, &labels, &config)?;

    for (input, label) in inputs.iter().zip(labels.iter()) {
        let prob = network.predict(input)?[0];
        let decision = if prob > 0.5 { 1 } else { 0 };
        println!("Input: {}, {}", input[0], input[1]);
        println!("Output Probability: {}", prob);
        println!("Output: {}", decision);
        println!("Expected Output: {}", label[0]);
        println!("----------------------");
    }

    Ok(())
}
