// Pipeline orchestration and end-to-end training.

use std::sync::atomic::AtomicBool;
use std::sync::{mpsc, Arc};

use pipenet::{GradientMode, InitRng, Layer, NnError, Pipeline, TrainConfig};

fn xor_data() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let labels = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
    (inputs, labels)
}

fn xor_network(seed: u64) -> Pipeline {
    let mut rng = InitRng::seeded(seed);
    let mut network = Pipeline::new();
    network
        .add(Layer::dense_with_rng(2, 3, &mut rng))
        .add(Layer::relu())
        .add(Layer::dense_with_rng(3, 3, &mut rng))
        .add(Layer::relu())
        .add(Layer::dense_with_rng(3, 1, &mut rng))
        .add(Layer::sigmoid());
    network
}

#[test]
fn predict_is_idempotent_and_matches_forward() {
    let mut network = xor_network(21);
    let input = [1.0, 0.0];
    let a = network.predict(&input).unwrap();
    let b = network.predict(&input).unwrap();
    assert_eq!(a, b);
    assert_eq!(network.forward(&input).unwrap(), a);
    assert_eq!(network.predict(&input).unwrap(), a);
}

#[test]
fn back_updates_only_dense_layers_and_returns_input_gradient() {
    let mut network = xor_network(4);
    let before: Vec<_> = network
        .layers()
        .iter()
        .filter_map(|l| match l {
            Layer::Dense(d) => Some(d.biases().to_vec()),
            _ => None,
        })
        .collect();

    network.forward(&[1.0, 1.0]).unwrap();
    let grad = network.back(&[0.5], 0.1).unwrap();
    assert_eq!(grad.len(), 2);

    let trainable = network.layers().iter().filter(|l| l.is_trainable()).count();
    assert_eq!(trainable, 3);
    let after: Vec<_> = network
        .layers()
        .iter()
        .filter_map(|l| match l {
            Layer::Dense(d) => Some(d.biases().to_vec()),
            _ => None,
        })
        .collect();
    // The output bias moves by lr * error regardless of the hidden activations.
    assert_ne!(before[2], after[2]);
}

#[test]
fn fit_reduces_loss() {
    let (inputs, labels) = xor_data();
    let mut network = xor_network(9);
    let config = TrainConfig::new(2000, 0.01).with_verbose(false);
    let history = network.fit_with(&inputs, &labels, &config).unwrap();
    assert_eq!(history.len(), 2000);
    assert_eq!(history[0].epoch, 0);
    assert_eq!(history[1999].total_epochs, 2000);
    assert!(history[1999].total_loss < history[0].total_loss);
    assert!((history[5].mean_loss * 4.0 - history[5].total_loss).abs() < 1e-12);
}

#[test]
fn fit_learns_xor() {
    let (inputs, labels) = xor_data();
    let mut network = xor_network(0);
    let config = TrainConfig::new(10000, 0.01).with_verbose(false);
    let history = network.fit_with(&inputs, &labels, &config).unwrap();
    assert_eq!(history.len(), 10000);

    for (x, y) in inputs.iter().zip(labels.iter()) {
        let p = network.predict(x).unwrap()[0];
        assert_eq!(p > 0.5, y[0] > 0.5, "input {:?} predicted {}", x, p);
    }
}

#[test]
fn fit_rejects_bad_datasets() {
    let mut network = xor_network(0);
    assert_eq!(
        network.fit(&[], &[], 1, 0.01).unwrap_err(),
        NnError::EmptyInput("training dataset")
    );

    let (inputs, labels) = xor_data();
    assert!(matches!(
        network.fit(&inputs, &labels[..3], 1, 0.01),
        Err(NnError::ShapeMismatch { expected: 4, actual: 3, .. })
    ));
    assert!(matches!(
        network.fit(&inputs, &labels, 1, 0.0),
        Err(NnError::InvalidConfig(_))
    ));
}

#[test]
fn failing_sample_aborts_training() {
    let mut network = xor_network(0);
    let inputs = vec![vec![0.0, 1.0], vec![1.0]];
    let labels = vec![vec![1.0], vec![0.0]];
    let config = TrainConfig::new(5, 0.01).with_verbose(false);
    assert!(matches!(
        network.fit_with(&inputs, &labels, &config),
        Err(NnError::ShapeMismatch { context: "Dense input", .. })
    ));
}

#[test]
fn progress_channel_receives_every_epoch() {
    let (inputs, labels) = xor_data();
    let mut network = xor_network(2);
    let (tx, rx) = mpsc::channel();
    let config = TrainConfig::new(25, 0.01).with_verbose(false).with_progress(tx);
    let history = network.fit_with(&inputs, &labels, &config).unwrap();
    drop(config);

    let received: Vec<_> = rx.iter().collect();
    assert_eq!(received, history);
    assert_eq!(received.len(), 25);
}

#[test]
fn dropped_receiver_stops_training() {
    let (inputs, labels) = xor_data();
    let mut network = xor_network(2);
    let (tx, rx) = mpsc::channel();
    drop(rx);
    let config = TrainConfig::new(100, 0.01).with_verbose(false).with_progress(tx);
    let history = network.fit_with(&inputs, &labels, &config).unwrap();
    assert_eq!(history.len(), 1);
}

#[test]
fn stop_flag_prevents_epochs() {
    let (inputs, labels) = xor_data();
    let mut network = xor_network(2);
    let before = network.predict(&[1.0, 0.0]).unwrap();
    let config = TrainConfig::new(100, 0.01)
        .with_verbose(false)
        .with_stop_flag(Arc::new(AtomicBool::new(true)));
    let history = network.fit_with(&inputs, &labels, &config).unwrap();
    assert!(history.is_empty());
    assert_eq!(network.predict(&[1.0, 0.0]).unwrap(), before);
}

#[test]
fn first_output_mode_rejects_multi_output_networks() {
    let mut rng = InitRng::seeded(6);
    let mut network = Pipeline::new();
    network
        .add(Layer::dense_with_rng(2, 2, &mut rng))
        .add(Layer::sigmoid());
    let inputs = vec![vec![1.0, 0.0]];
    let labels = vec![vec![1.0, 0.0]];
    let config = TrainConfig::new(1, 0.1).with_verbose(false);
    assert!(matches!(
        network.fit_with(&inputs, &labels, &config),
        Err(NnError::ShapeMismatch { expected: 2, actual: 1, .. })
    ));
}

#[test]
fn elementwise_mode_trains_multi_output_networks() {
    let mut rng = InitRng::seeded(6);
    let mut network = Pipeline::new();
    network
        .add(Layer::dense_with_rng(2, 2, &mut rng))
        .add(Layer::sigmoid());
    let inputs = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let labels = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let config = TrainConfig::new(500, 0.05)
        .with_verbose(false)
        .with_gradient_mode(GradientMode::Elementwise);
    let history = network.fit_with(&inputs, &labels, &config).unwrap();
    assert!(history[499].total_loss < history[0].total_loss);

    let out = network.predict(&[1.0, 0.0]).unwrap();
    assert!(out[0] > 0.5 && out[1] < 0.5);
}
