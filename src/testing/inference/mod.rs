use crate::testing::{CorrelationMethod, MantelConfig, MantelResult};
use ndarray::Array2;
use single_utilities::traits::FloatOpsTS;

pub mod mantel;

pub trait MatrixMantelTests<T>
where
    T: FloatOpsTS,
{
    fn mantel(
        &self,
        other: &Array2<T>,
        method: CorrelationMethod,
        config: &MantelConfig,
    ) -> anyhow::Result<MantelResult>;

    /// Spearman result first, then Pearson.
    fn mantel_both(
        &self,
        other: &Array2<T>,
        config: &MantelConfig,
    ) -> anyhow::Result<(MantelResult, MantelResult)>;
}

impl<T> MatrixMantelTests<T> for Array2<T>
where
    T: FloatOpsTS,
{
    fn mantel(
        &self,
        other: &Array2<T>,
        method: CorrelationMethod,
        config: &MantelConfig,
    ) -> anyhow::Result<MantelResult> {
        mantel::mantel(self.view(), other.view(), method, config)
    }

    fn mantel_both(
        &self,
        other: &Array2<T>,
        config: &MantelConfig,
    ) -> anyhow::Result<(MantelResult, MantelResult)> {
        let spearman = self.mantel(other, CorrelationMethod::Spearman, config)?;
        let pearson = self.mantel(other, CorrelationMethod::Pearson, config)?;
        Ok((spearman, pearson))
    }
}
