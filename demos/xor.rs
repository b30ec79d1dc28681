use std::sync::mpsc;
use std::thread;

use pipenet::{EpochStats, InitRng, Layer, Pipeline, TrainConfig};

fn main() -> pipenet::Result<()> {
    let mut rng = InitRng::seeded(7);
    let mut network = Pipeline::new();
    network
        .add(Layer::dense_with_rng(2, 4, &mut rng))
        .add(Layer::tanh())
        .add(Layer::dense_with_rng(4, 4, &mut rng))
        .add(Layer::leaky_relu())
        .add(Layer::dense_with_rng(4, 1, &mut rng))
        .add(Layer::sigmoid());

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    let (tx, rx) = mpsc::channel::<EpochStats>();
    let reporter = thread::spawn(move || {
        for stats in rx {
            if stats.epoch % 1000 == 0 {
                println!("Epoch {}: loss = {:.6}", stats.epoch, stats.mean_loss);
            }
        }
    });

    let config = TrainConfig::new(10000, 0.05)
        .with_verbose(false)
        .with_progress(tx);
    network.fit_with(&inputs, &expected_outputs, &config)?;
    drop(config);
    let _ = reporter.join();

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(input)?[0]);
    }
    Ok(())
}
