/// Numeric element types accepted in input buffers.
pub trait NumericData: Copy {
    /// Widen into the canonical `f64` form.
    fn to_f64(self) -> f64;
}

impl NumericData for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}
impl NumericData for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}
impl NumericData for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}
impl NumericData for i32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}
impl NumericData for i16 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

/// Ordered numeric sequence accepted at the analysis entry points.
///
/// Callers may hand in native `f64` collections or fixed buffers of any
/// [`NumericData`] element type. Every representation is normalized once
/// into a canonical `Vec<f64>`, so downstream computation is identical
/// regardless of the form supplied.
pub trait NumericSequence {
    /// Number of records in the sequence.
    fn len(&self) -> usize;
    /// True when the sequence holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Normalize into the canonical `f64` form.
    fn to_canonical(&self) -> Vec<f64>;
}

impl<T: NumericData> NumericSequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
    fn to_canonical(&self) -> Vec<f64> {
        self.iter().map(|v| v.to_f64()).collect()
    }
}

impl<T: NumericData> NumericSequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn to_canonical(&self) -> Vec<f64> {
        self.as_slice().to_canonical()
    }
}

impl<T: NumericData, const N: usize> NumericSequence for [T; N] {
    fn len(&self) -> usize {
        N
    }
    fn to_canonical(&self) -> Vec<f64> {
        self.as_slice().to_canonical()
    }
}
