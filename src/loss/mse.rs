pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((expected - predicted)²).
    ///
    /// This is the loss recorded after every training step: `fit` re-runs
    /// the whole dataset through the unit and hands the predictions here.
    /// Both slices must have equal, non-zero length.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        assert_eq!(predicted.len(), expected.len());
        let total: f64 = predicted
            .iter()
            .zip(expected.iter())
            .map(|(p, y)| (y - p) * (y - p))
            .sum();
        total / expected.len() as f64
    }
}
