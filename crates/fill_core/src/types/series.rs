//! Sample series representation.

use super::error::SeriesError;
use num_traits::Float;

/// A sample value: either a known measurement or an explicit gap.
///
/// The unknown marker is a tagged variant rather than a reserved numeric
/// sentinel, so it can never collide with a legitimate value or leak into
/// arithmetic.
///
/// # Example
///
/// ```
/// use fill_core::types::Value;
///
/// let known = Value::Known(3.5);
/// assert_eq!(known.known(), Some(3.5));
/// assert!(Value::<f64>::Unknown.is_unknown());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<T> {
    /// A concrete measured or interpolated value.
    Known(T),
    /// An explicit gap.
    Unknown,
}

impl<T: Copy> Value<T> {
    /// Returns the contained value, or `None` for a gap.
    #[inline]
    pub fn known(self) -> Option<T> {
        match self {
            Value::Known(v) => Some(v),
            Value::Unknown => None,
        }
    }

    /// Returns true if the value is known.
    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    /// Returns true if the value is a gap.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }
}

/// One (position, value) sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// Ordered numeric key.
    pub position: T,
    /// Known value or explicit gap.
    pub value: Value<T>,
}

/// Ordered series of samples with strictly increasing positions.
///
/// The series is the engine's working buffer: a fill pass mutates it in
/// place, index by index in ascending order. Strictly increasing positions
/// are validated at construction, so index order and position order always
/// agree and no two samples share a position.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use fill_core::types::{Series, Value};
///
/// let series = Series::from_columns(
///     &[1.0, 2.0, 3.0],
///     &[Value::Known(10.0), Value::Unknown, Value::Known(30.0)],
/// )
/// .unwrap();
///
/// assert_eq!(series.len(), 3);
/// assert!(series.value(1).is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T: Float> {
    /// Samples in strictly increasing position order
    samples: Vec<Sample<T>>,
}

impl<T: Float> Series<T> {
    /// Construct a series from samples.
    ///
    /// # Arguments
    ///
    /// * `samples` - Samples in strictly increasing position order
    ///
    /// # Returns
    ///
    /// * `Ok(Series)` - Successfully constructed series
    /// * `Err(SeriesError::NonIncreasingPositions)` - A position does not
    ///   exceed its predecessor
    ///
    /// # Example
    ///
    /// ```
    /// use fill_core::types::{Sample, Series, Value};
    ///
    /// let samples = vec![
    ///     Sample { position: 0.0, value: Value::Known(1.0) },
    ///     Sample { position: 1.0, value: Value::Unknown },
    /// ];
    /// let series = Series::new(samples).unwrap();
    /// assert_eq!(series.len(), 2);
    /// ```
    pub fn new(samples: Vec<Sample<T>>) -> Result<Self, SeriesError> {
        for i in 1..samples.len() {
            if samples[i].position <= samples[i - 1].position {
                return Err(SeriesError::NonIncreasingPositions { index: i });
            }
        }
        Ok(Self { samples })
    }

    /// Construct a series from parallel position and value columns.
    ///
    /// # Returns
    ///
    /// * `Ok(Series)` - Successfully constructed series
    /// * `Err(SeriesError::LengthMismatch)` - Columns differ in length
    /// * `Err(SeriesError::NonIncreasingPositions)` - Positions not strictly increasing
    pub fn from_columns(positions: &[T], values: &[Value<T>]) -> Result<Self, SeriesError> {
        if positions.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                positions: positions.len(),
                values: values.len(),
            });
        }

        let samples = positions
            .iter()
            .zip(values.iter())
            .map(|(&position, &value)| Sample { position, value })
            .collect();

        Self::new(samples)
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the series has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the samples in position order.
    #[inline]
    pub fn samples(&self) -> &[Sample<T>] {
        &self.samples
    }

    /// Returns the sample at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Sample<T>> {
        self.samples.get(index)
    }

    /// Returns the position at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn position(&self, index: usize) -> T {
        self.samples[index].position
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn value(&self, index: usize) -> Value<T> {
        self.samples[index].value
    }

    /// Indices whose value is currently known, in ascending order.
    ///
    /// Evaluated against the live series, so indices filled earlier in a
    /// pass are included.
    pub fn known_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.samples
            .iter()
            .enumerate()
            .filter(|(_, sample)| sample.value.is_known())
            .map(|(index, _)| index)
    }

    /// Overwrite the value at `index` with a known value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub(crate) fn set_value(&mut self, index: usize, value: T) {
        self.samples[index].value = Value::Known(value);
    }
}
