//! This is the command line entrypoint for growing a single tree from a histogram stored as JSON.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use ebm_tree::{
	grow, GrowBuffers, GrowOptions, Histogram, LogLossClassification, Loss, MseRegressionLoss,
	TermUpdate,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "grow a single tree over the bins of a histogram")]
#[command(
	long_about = "grow a single tree over the bins of a histogram and print the update as json"
)]
struct Args {
	#[arg(help = "the path to the histogram .json file, or - for stdin")]
	histogram: PathBuf,
	#[arg(short, long, help = "the path to a .json file with grow options")]
	config: Option<PathBuf>,
	#[arg(long, help = "the maximum number of leaves")]
	max_leaves: Option<usize>,
	#[arg(long, help = "the minimum number of samples on each side of a split")]
	min_samples_leaf: Option<usize>,
	#[arg(long, help = "the net gain a split must exceed")]
	min_gain_to_split: Option<f64>,
	#[arg(long, default_value_t = 0, help = "the seed used to break ties")]
	seed: u64,
	#[arg(long, value_enum, default_value_t = Task::Regression)]
	task: Task,
	#[arg(long, help = "shift the first score of every leaf to zero")]
	zero_first_logit: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Task {
	Regression,
	Classification,
}

fn main() -> Result<()> {
	let env = env_logger::Env::default().default_filter_or("ebm_tree=info");
	env_logger::Builder::from_env(env)
		.format_module_path(false)
		.format_timestamp(None)
		.init();
	let args = Args::parse();
	let options = load_options(&args)?;
	let histogram = load_histogram(&args.histogram)?;
	let loss: &dyn Loss = match args.task {
		Task::Regression => &MseRegressionLoss,
		Task::Classification => &LogLossClassification,
	};
	let mut rng = Xoshiro256Plus::seed_from_u64(args.seed);
	// A tree never has more leaves than bins.
	let max_leaves = options.max_leaves.min(histogram.n_bins());
	let mut buffers = GrowBuffers::new(max_leaves, histogram.n_scores())
		.context("failed to allocate the tree buffers")?;
	let mut update = TermUpdate::new(1, histogram.n_scores());
	let summary = grow(
		&histogram,
		loss,
		&mut rng,
		&options,
		&mut buffers,
		&mut update,
		0,
	)?;
	log::info!(
		"grew {} leaves with gain {}",
		summary.n_leaves,
		summary.total_gain
	);
	#[cfg(feature = "timing")]
	log::info!("{:?}", buffers.timing());
	let output = serde_json::json!({
		"total_gain": summary.total_gain,
		"n_leaves": summary.n_leaves,
		"update": update,
	});
	println!("{}", serde_json::to_string_pretty(&output)?);
	Ok(())
}

fn load_options(args: &Args) -> Result<GrowOptions> {
	let mut options: GrowOptions = match &args.config {
		Some(path) => {
			let config = std::fs::read_to_string(path)
				.with_context(|| format!("failed to read config {}", path.display()))?;
			serde_json::from_str(&config).context("failed to parse config")?
		}
		None => GrowOptions::default(),
	};
	if let Some(max_leaves) = args.max_leaves {
		options.max_leaves = max_leaves;
	}
	if let Some(min_samples_leaf) = args.min_samples_leaf {
		options.min_samples_leaf = min_samples_leaf;
	}
	if let Some(min_gain_to_split) = args.min_gain_to_split {
		options.min_gain_to_split = min_gain_to_split;
	}
	if args.zero_first_logit {
		options.zero_first_logit = true;
	}
	if options.max_leaves < 2 {
		bail!("max_leaves must be at least 2");
	}
	if options.min_samples_leaf == 0 {
		bail!("min_samples_leaf must be at least 1");
	}
	Ok(options)
}

fn load_histogram(path: &Path) -> Result<Histogram> {
	let json = if path.to_str() == Some("-") {
		std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?
	} else {
		std::fs::read_to_string(path)
			.with_context(|| format!("failed to read histogram {}", path.display()))?
	};
	let mut histogram: Histogram =
		serde_json::from_str(&json).context("failed to parse histogram")?;
	let n_scores = match histogram.bins.first() {
		Some(bin) => bin.n_scores(),
		None => bail!("the histogram has no bins"),
	};
	if n_scores == 0 {
		bail!("the bins have no gradients");
	}
	if histogram.bins.iter().any(|bin| bin.n_scores() != n_scores) {
		bail!("every bin must have the same number of gradients");
	}
	if histogram.n_bins() < 2 {
		bail!("the histogram needs at least two bins");
	}
	histogram.compute_total();
	if histogram.total().n_samples == 0 {
		bail!("the histogram has no samples");
	}
	Ok(histogram)
}
