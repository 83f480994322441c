use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::debug;
use std::path::PathBuf;

use compare_matrices::{
    io::load_matrix,
    testing::{
        correlation::bray_curtis_distance, inference::MatrixMantelTests, Alternative,
        MantelConfig,
    },
};

const USAGE: &str = "Usage: compare-matrices <matrix1.txt> <matrix2.txt>";

#[derive(Parser)]
#[command(name = "compare-matrices", version, about, long_about = None)]
struct Cli {
    /// The two matrix files to compare
    #[arg(value_name = "MATRIX")]
    matrices: Vec<PathBuf>,

    /// Number of permutations for the p-value
    #[arg(short, long, default_value_t = 999)]
    permutations: usize,

    /// Alternative hypothesis
    #[arg(short, long, value_enum, default_value_t = AlternativeArg::TwoSided)]
    alternative: AlternativeArg,

    /// Seed for reproducible permutations
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also print the element-wise Bray-Curtis distance
    #[arg(long)]
    bray_curtis: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlternativeArg {
    TwoSided,
    Greater,
    Less,
}

impl From<AlternativeArg> for Alternative {
    fn from(arg: AlternativeArg) -> Self {
        match arg {
            AlternativeArg::TwoSided => Alternative::TwoSided,
            AlternativeArg::Greater => Alternative::Greater,
            AlternativeArg::Less => Alternative::Less,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let [first, second] = cli.matrices.as_slice() else {
        println!("{}", USAGE);
        return Ok(());
    };

    let mut config = MantelConfig::default()
        .with_permutations(cli.permutations)
        .with_alternative(cli.alternative.into());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    debug!("Comparing {} and {} with {:?}", first.display(), second.display(), config);

    let m1 = load_matrix(first)?;
    let m2 = load_matrix(second)?;

    let (spr, prs) = m1.mantel_both(&m2, &config)?;
    println!("Spearman:  {}", spr);
    println!("Pearson:  {}", prs);

    if cli.bray_curtis {
        let m1_values: Vec<f64> = m1.iter().copied().collect();
        let m2_values: Vec<f64> = m2.iter().copied().collect();
        println!("Bray-Curtis:  {:?}", bray_curtis_distance(&m1_values, &m2_values)?);
    }

    Ok(())
}
