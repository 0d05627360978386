//! Datasets
//!
//! A dataset bundles the predictor records, the response and their names. The constructors
//! validate shapes and values so that everything downstream can assume a well formed
//! `(n_samples, n_features)` matrix with a matching response.
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix1, Ix2};

use crate::error::{RegressionError, Result};
use crate::Float;

/// Records, targets and descriptive names used to fit a regression
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: the response with dimensionality (nsamples)
/// * `feature_names`: one name per predictor column
/// * `target_name`: the name of the response
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    records: Array2<F>,
    targets: Array1<F>,
    feature_names: Vec<String>,
    target_name: String,
}

impl<F: Float> Dataset<F> {
    /// Create a dataset from a `(n_samples, n_features)` record matrix and a response
    ///
    /// Fails if there is no predictor, fewer than two samples, a length mismatch between
    /// records and targets, or a non-finite value.
    pub fn new<D1, D2>(records: ArrayBase<D1, Ix2>, targets: ArrayBase<D2, Ix1>) -> Result<Self>
    where
        D1: Data<Elem = F>,
        D2: Data<Elem = F>,
    {
        let (n_samples, n_features) = records.dim();
        if n_features == 0 {
            return Err(RegressionError::EmptyDesign);
        }
        if n_samples != targets.len() {
            return Err(RegressionError::DimensionMismatch {
                column: 0,
                expected: targets.len(),
                found: n_samples,
            });
        }

        let dataset = Dataset {
            feature_names: default_feature_names(n_features),
            target_name: "y".to_string(),
            records: records.to_owned(),
            targets: targets.to_owned(),
        };
        dataset.validate()?;

        Ok(dataset)
    }

    /// Create a dataset from a list of predictor columns and a response
    ///
    /// This is the layout used by callers slicing columns out of a dataframe: `data[j][i]`
    /// is the value of predictor `j` for sample `i`.
    pub fn from_columns<C: AsRef<[F]>>(data: &[C], y: &[F]) -> Result<Self> {
        if data.is_empty() {
            return Err(RegressionError::EmptyDesign);
        }

        let n_samples = y.len();
        for (column, values) in data.iter().enumerate() {
            let found = values.as_ref().len();
            if found != n_samples {
                return Err(RegressionError::DimensionMismatch {
                    column,
                    expected: n_samples,
                    found,
                });
            }
        }

        let records = Array2::from_shape_fn((n_samples, data.len()), |(i, j)| data[j].as_ref()[i]);

        let dataset = Dataset {
            feature_names: default_feature_names(data.len()),
            target_name: "y".to_string(),
            records,
            targets: Array1::from(y.to_vec()),
        };
        dataset.validate()?;

        Ok(dataset)
    }

    /// Name the predictor columns
    ///
    /// The number of names has to agree with the number of predictors.
    pub fn with_feature_names<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.nfeatures() {
            return Err(RegressionError::InvalidInput(format!(
                "{} feature names given for {} predictors",
                names.len(),
                self.nfeatures()
            )));
        }
        self.feature_names = names;

        Ok(self)
    }

    /// Name the response
    pub fn with_target_name<S: Into<String>>(mut self, name: S) -> Self {
        self.target_name = name.into();
        self
    }

    pub fn records(&self) -> ArrayView2<'_, F> {
        self.records.view()
    }

    pub fn targets(&self) -> ArrayView1<'_, F> {
        self.targets.view()
    }

    /// Return the j-th predictor column
    pub fn feature(&self, j: usize) -> ArrayView1<'_, F> {
        self.records.index_axis(Axis(1), j)
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    fn validate(&self) -> Result<()> {
        if self.nsamples() < 2 {
            return Err(RegressionError::NotEnoughSamples(self.nsamples()));
        }

        for (j, column) in self.records.columns().into_iter().enumerate() {
            if let Some(i) = column.iter().position(|x| !x.is_finite()) {
                return Err(RegressionError::InvalidInput(format!(
                    "non-finite value {} in predictor {} at row {}",
                    column[i], self.feature_names[j], i
                )));
            }
        }
        if let Some(i) = self.targets.iter().position(|x| !x.is_finite()) {
            return Err(RegressionError::InvalidInput(format!(
                "non-finite value {} in response at row {}",
                self.targets[i], i
            )));
        }

        Ok(())
    }
}

fn default_feature_names(n: usize) -> Vec<String> {
    (0..n).map(|j| format!("x{}", j)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn columns_are_transposed_into_records() {
        let dataset = Dataset::from_columns(&[vec![1., 2., 3.], vec![4., 5., 6.]], &[0., 1., 0.])
            .unwrap();

        assert_eq!(dataset.records(), array![[1., 4.], [2., 5.], [3., 6.]]);
        assert_eq!(dataset.feature(1), array![4., 5., 6.]);
        assert_eq!(dataset.feature_names(), &["x0", "x1"]);
        assert_eq!(dataset.target_name(), "y");
    }

    #[test]
    fn rejects_mismatched_column() {
        let err = Dataset::from_columns(&[vec![1., 2., 3.], vec![4., 5.]], &[0., 1., 0.])
            .unwrap_err();

        assert_eq!(
            err,
            RegressionError::DimensionMismatch {
                column: 1,
                expected: 3,
                found: 2
            }
        );
        assert!(err.is_dimension_mismatch());
    }

    #[test]
    fn rejects_empty_and_tiny_inputs() {
        let empty: [Vec<f64>; 0] = [];
        assert_eq!(
            Dataset::from_columns(&empty, &[1., 2.]).unwrap_err(),
            RegressionError::EmptyDesign
        );
        assert_eq!(
            Dataset::from_columns(&[vec![1.]], &[1.]).unwrap_err(),
            RegressionError::NotEnoughSamples(1)
        );
        assert!(Dataset::new(array![[1.], [2.]], array![1., 2., 3.])
            .unwrap_err()
            .is_dimension_mismatch());
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = Dataset::from_columns(&[vec![1., f64::NAN, 3.]], &[0., 1., 0.]).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidInput(_)));

        let err = Dataset::new(array![[1.], [2.]], array![1., f64::INFINITY]).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidInput(_)));
    }

    #[test]
    fn feature_names_must_match_predictors() {
        let dataset = Dataset::new(array![[1., 2.], [3., 4.]], array![1., 2.]).unwrap();

        assert!(dataset.clone().with_feature_names(vec!["a"]).is_err());

        let named = dataset
            .with_feature_names(vec!["sqft", "rooms"])
            .unwrap()
            .with_target_name("price");
        assert_eq!(named.feature_names(), &["sqft", "rooms"]);
        assert_eq!(named.target_name(), "price");
    }
}
