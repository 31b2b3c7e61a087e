use anyhow::{bail, Context, Error as Anyhow};
use clap::{Args, Parser, Subcommand};
use perceptron::feed_forward::{Network, TrainableNetwork};
use perceptron::image::Image;
use perceptron::persist;
use perceptron::trainer::{Logging, Trained, Trainer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_derive::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};
use tracing::{info, instrument, Level};

#[derive(Parser)]
#[command(author, about = "Trains and runs a backpropagation perceptron")]
struct Opts {
    #[arg(short, long, value_name = "level", default_value = "info")]
    verbosity: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a network on a JSON training set and save its weights.
    Train(Train),
    /// Train a network to compute XOR and print its outputs.
    Xor(Schedule),
    /// Classify an image with previously trained weights.
    Classify(Classify),
}

/// Training loop settings shared by every subcommand that trains.
#[derive(Args)]
struct Schedule {
    /// Scale of every weight update.
    #[arg(long, default_value_t = 0.7)]
    learning_rate: f64,

    /// Stop once the total error is at most this.
    #[arg(long, default_value_t = 0.01)]
    threshold: f64,

    /// Give up after this many sweeps; trains until convergence if unset.
    #[arg(long)]
    max_sweeps: Option<usize>,

    /// Seed for the initial weights.
    #[arg(long)]
    seed: Option<u64>,

    /// Log the error every this many sweeps.
    #[arg(long, default_value_t = 1000)]
    log_every: usize,
}

#[derive(Args)]
struct Train {
    /// JSON file holding `inputs` and `targets` arrays.
    #[arg(long, value_name = "file")]
    set: PathBuf,

    /// Width of each hidden layer.
    #[arg(long, value_name = "width", num_args = 1..)]
    hidden: Vec<usize>,

    /// Where to write the trained weights.
    #[arg(long, value_name = "file")]
    weights: PathBuf,

    #[command(flatten)]
    schedule: Schedule,
}

#[derive(Args)]
struct Classify {
    /// Weights written by `train`.
    #[arg(long, value_name = "file")]
    weights: PathBuf,

    /// JSON file holding the image as an array of pixel rows.
    #[arg(long, value_name = "file")]
    image: PathBuf,

    /// Side of the square the image is scaled to.
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Pixels a row or column needs to count as part of the letter.
    #[arg(long, default_value_t = 1)]
    min_pixels: usize,

    /// Smallest pixel value that counts as ink.
    #[arg(long, default_value_t = 1)]
    ink: u32,
}

#[derive(Deserialize)]
struct TrainingSet {
    inputs: Vec<Vec<f64>>,
    targets: Vec<Vec<f64>>,
}

impl Schedule {
    fn train(&self, network: TrainableNetwork) -> Trained<TrainableNetwork> {
        Trainer::new(network)
            .learning_rate(self.learning_rate)
            .error_threshold(self.threshold)
            .max_sweeps(self.max_sweeps)
            .logging(Logging::Sweeps(self.log_every))
            .train()
    }

    fn network(
        &self,
        inputs: Vec<Vec<f64>>,
        targets: Vec<Vec<f64>>,
        shapes: &[(usize, usize)],
    ) -> Result<TrainableNetwork, Anyhow> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(TrainableNetwork::with_rng(inputs, targets, shapes, &mut rng)?)
    }
}

/// Chains layer widths into weight matrix shapes.
fn shapes(widths: &[usize]) -> Vec<(usize, usize)> {
    widths.windows(2).map(|w| (w[0], w[1])).collect()
}

fn read_json<T, P>(path: P) -> Result<T, Anyhow>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

#[instrument(skip_all, err)]
fn train(cmd: Train) -> Result<(), Anyhow> {
    let TrainingSet { inputs, targets } = read_json(&cmd.set)?;
    let (input_len, output_len) = match (inputs.first(), targets.first()) {
        (Some(i), Some(t)) => (i.len(), t.len()),
        _ => bail!("{} holds no examples", cmd.set.display()),
    };

    let mut widths = vec![input_len];
    widths.extend(&cmd.hidden);
    widths.push(output_len);
    info!(?widths, examples = inputs.len(), "training");

    let network = cmd.schedule.network(inputs, targets, &shapes(&widths))?;
    let trained = cmd.schedule.train(network);
    persist::save(&cmd.weights, trained.model.network().weights())
        .with_context(|| format!("writing {}", cmd.weights.display()))?;
    info!(weights = %cmd.weights.display(), converged = trained.report.converged, "saved");
    Ok(())
}

#[instrument(skip_all, err)]
fn xor(schedule: Schedule) -> Result<(), Anyhow> {
    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    let network = schedule.network(inputs.clone(), targets, &[(2, 2), (2, 1)])?;
    let network = schedule.train(network).model.into_network();
    for input in &inputs {
        println!("{:?} -> {:.4}", input, network.evaluate(input)[0]);
    }
    Ok(())
}

#[instrument(skip_all, err)]
fn classify(cmd: Classify) -> Result<(), Anyhow> {
    let weights = persist::load(&cmd.weights)
        .with_context(|| format!("reading {}", cmd.weights.display()))?;
    let network = Network::new(weights)?;

    let rows: Vec<Vec<u32>> = read_json(&cmd.image)?;
    let input = Image::from_rows(&rows)?.to_input(cmd.size, cmd.size, cmd.min_pixels, cmd.ink)?;
    if input.len() != network.input_len() {
        bail!(
            "a {0}x{0} image gives {1} inputs, the network takes {2}",
            cmd.size,
            input.len(),
            network.input_len()
        );
    }

    let output = network.evaluate(&input);
    for (i, value) in output.iter().enumerate() {
        println!("{}\t{:.4}", label(i), value);
    }
    let best = output
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i);
    if let Some(best) = best {
        println!("best match: {}", label(best));
    }
    Ok(())
}

/// Names output node `i`, with letters for the first 26.
fn label(i: usize) -> String {
    if i < 26 {
        char::from(b'A' + i as u8).to_string()
    } else {
        i.to_string()
    }
}

fn main() -> Result<(), Anyhow> {
    let Opts { verbosity, command } = Opts::parse();

    tracing_subscriber::fmt()
        .with_max_level(verbosity)
        .with_writer(io::stderr)
        .init();

    match command {
        Command::Train(cmd) => train(cmd),
        Command::Xor(schedule) => xor(schedule),
        Command::Classify(cmd) => classify(cmd),
    }
}
