use std::sync::atomic::Ordering;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::{check_len, NnError, Result};
use crate::loss::bce::BceLoss;
use crate::loss::gradient_mode::GradientMode;
use crate::network::pipeline::Pipeline;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `pipeline` with online SGD and returns the stats of every
/// completed epoch.
///
/// Samples are visited in their given order every epoch, one forward and one
/// backward pass each. Any error aborts the run immediately; parameters keep
/// whatever updates were applied before the failing sample.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
pub fn train_loop(
    pipeline: &mut Pipeline,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    config.validate()?;
    if inputs.is_empty() {
        return Err(NnError::EmptyInput("training dataset"));
    }
    check_len("training labels", inputs.len(), labels.len())?;

    info!(
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        samples = inputs.len(),
        layers = pipeline.len(),
        "starting training"
    );

    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 0..config.epochs {
        if stop_requested(config) {
            warn!(epoch, "stop flag set, ending training");
            break;
        }

        let t_start = Instant::now();

        let total_loss = run_one_epoch(
            pipeline,
            inputs,
            labels,
            config.learning_rate,
            config.gradient_mode,
        )?;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            total_loss,
            mean_loss: total_loss / inputs.len() as f64,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if config.verbose {
            println!("{}", stats);
        }
        debug!(epoch, total_loss, "epoch finished");

        history.push(stats.clone());

        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                warn!(epoch, "progress receiver dropped, ending training");
                break;
            }
        }
    }

    if let Some(last) = history.last() {
        info!(epochs_run = history.len(), final_loss = last.total_loss, "training finished");
    }

    Ok(history)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn stop_requested(config: &TrainConfig) -> bool {
    config
        .stop_flag
        .as_ref()
        .map_or(false, |flag| flag.load(Ordering::Relaxed))
}

/// One pass over the data, updating after every sample.
/// Returns the summed loss.
fn run_one_epoch(
    pipeline: &mut Pipeline,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    learning_rate: f64,
    gradient_mode: GradientMode,
) -> Result<f64> {
    let mut total_loss = 0.0;

    for (input, expected) in inputs.iter().zip(labels.iter()) {
        let output = pipeline.forward(input)?;

        total_loss += BceLoss::loss(expected, &output)?;

        let error = BceLoss::derivative(expected, &output, gradient_mode)?;
        pipeline.back(&error, learning_rate)?;
    }

    Ok(total_loss)
}
