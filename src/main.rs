use std::{env, fs};

use anyhow::{Context, Result};
use linear_sgd::{
    arch::loss::{LossFn, Mse},
    dataset::Dataset,
    optimization::SgdBuilder,
    specs::SgdSpec,
};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

const SAMPLES: usize = 100;
const SLOPE: f64 = 0.25;
const INTERCEPT: f64 = -0.5;
const NOISE: f64 = 0.1;

fn main() -> Result<()> {
    env_logger::init();

    let spec: SgdSpec = match env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?
        }
        None => SgdSpec::default(),
    };
    info!("spec: {spec:?}");

    let mut sgd = SgdBuilder::new()
        .build(&spec)
        .context("building the optimizer")?;

    let mut rng = match spec.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let dataset = Dataset::linear(SAMPLES, SLOPE, INTERCEPT, NOISE, &mut rng)?;

    sgd.fit(dataset.x(), dataset.y()).context("fitting")?;
    let y_pred = sgd.predict_m(dataset.x())?;
    let mse = Mse.loss(y_pred.view(), dataset.y());

    info!("fitted {} samples of width {}", dataset.len(), dataset.x_size());
    println!("weights: {}", sgd.weights());
    println!("mse: {mse}");

    Ok(())
}
