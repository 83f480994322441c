use std::fmt;

pub mod correlation;
pub mod inference;

pub mod utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationMethod {
    Spearman, // Rank-based
    Pearson,  // Linear, on raw values
}

impl CorrelationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            CorrelationMethod::Spearman => "Spearman",
            CorrelationMethod::Pearson => "Pearson",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    #[default]
    TwoSided,
    Greater,
    Less,
}

/// Settings shared by every Mantel test run.
#[derive(Debug, Clone)]
pub struct MantelConfig {
    /// Number of row/column permutations used to build the null distribution
    pub permutations: usize,
    /// Alternative hypothesis for the p-value
    pub alternative: Alternative,
    /// Base seed for the permutation RNGs; drawn at random when absent
    pub seed: Option<u64>,
}

impl Default for MantelConfig {
    fn default() -> Self {
        MantelConfig {
            permutations: 999,
            alternative: Alternative::TwoSided,
            seed: None,
        }
    }
}

impl MantelConfig {
    pub fn with_permutations(mut self, permutations: usize) -> Self {
        self.permutations = permutations;
        self
    }

    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone)]
pub struct MantelResult {
    /// Correlation coefficient between the two matrices
    pub statistic: f64,
    /// Permutation p-value (NaN when no permutations were run)
    pub p_value: f64,
    /// Dimension of the compared matrices
    pub n: usize,
    pub method: CorrelationMethod,
    pub alternative: Alternative,
    pub permutations: usize,
}

impl MantelResult {
    /// Check if the result is statistically significant at the given threshold
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Prints the result as the `(statistic, p_value, n)` tuple.
impl fmt::Display for MantelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {})", self.statistic, self.p_value, self.n)
    }
}
