//! A batch of N rows, each holding m i.i.d. observations

use clt_core::{moments, ContinuousDistribution, Error, Result};
use rand::Rng;

/// N independent rows of m draws each, stored row-major
///
/// Created for one experiment run and dropped once its statistics have been
/// extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBatch {
    data: Vec<f64>,
    rows: usize,
    row_len: usize,
}

impl SampleBatch {
    /// Draw `rows × row_len` observations from `distribution`, row by row
    ///
    /// # Errors
    /// `InvalidParameter` if either dimension is zero.
    pub fn draw<R: Rng>(
        distribution: &dyn ContinuousDistribution,
        rows: usize,
        row_len: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if rows == 0 {
            return Err(Error::too_small("number of samples", rows, 1));
        }
        if row_len == 0 {
            return Err(Error::too_small("observations per sample", row_len, 1));
        }
        let data = distribution.sample(rows * row_len, rng);
        Ok(Self {
            data,
            rows,
            row_len,
        })
    }

    /// Number of rows (N)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Observations per row (m)
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.data.chunks_exact(self.row_len).nth(index)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.row_len)
    }

    /// Arithmetic mean of each row
    pub fn row_means(&self) -> Vec<f64> {
        self.iter_rows()
            .map(|row| row.iter().sum::<f64>() / row.len() as f64)
            .collect()
    }

    /// Population standard deviation (divide by m) of each row
    pub fn row_std_devs(&self) -> Result<Vec<f64>> {
        self.iter_rows().map(moments::population_std_dev).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clt_distributions::{Normal, Uniform};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_dimensions() {
        let dist = Uniform::new(0.0, 1.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let batch = SampleBatch::draw(&dist, 7, 3, &mut rng).unwrap();

        assert_eq!(batch.rows(), 7);
        assert_eq!(batch.row_len(), 3);
        assert_eq!(batch.iter_rows().count(), 7);
        assert_eq!(batch.row(6).unwrap().len(), 3);
        assert!(batch.row(7).is_none());
        assert_eq!(batch.row_means().len(), 7);
    }

    #[test]
    fn test_rows_are_drawn_in_order() {
        let dist = Normal::standard().unwrap();
        let batch = SampleBatch::draw(&dist, 4, 5, &mut ChaCha8Rng::seed_from_u64(2)).unwrap();
        let flat = dist.sample(20, &mut ChaCha8Rng::seed_from_u64(2));

        assert_eq!(batch.row(1).unwrap(), &flat[5..10]);
    }

    #[test]
    fn test_row_statistics() {
        let dist = Normal::standard().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let batch = SampleBatch::draw(&dist, 3, 4, &mut rng).unwrap();

        let means = batch.row_means();
        let stds = batch.row_std_devs().unwrap();
        for (i, row) in batch.iter_rows().enumerate() {
            let mean = row.iter().sum::<f64>() / 4.0;
            let var = row.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 4.0;
            assert!((means[i] - mean).abs() < 1e-12);
            assert!((stds[i] - var.sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_observation_rows_have_zero_spread() {
        let dist = Normal::standard().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let batch = SampleBatch::draw(&dist, 10, 1, &mut rng).unwrap();
        assert!(batch.row_std_devs().unwrap().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let dist = Normal::standard().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(matches!(
            SampleBatch::draw(&dist, 0, 3, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            SampleBatch::draw(&dist, 3, 0, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
    }
}
