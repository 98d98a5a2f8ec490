use num::traits::Float;

/// A 2D point generic over any numeric type.
///
/// In the envelope geometry the x-component carries the centering (mm from datum)
/// and the y-component the mass (kg).
///
/// # Type Parameters
/// * `T` - The functionality for the vector depends on traits implemented by `T`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Vec2D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
}

impl<T: Copy> Vec2D<T> {
    /// Creates a new vector with the given x and y components.
    ///
    /// # Arguments
    /// * `x` - The x-component of the vector.
    /// * `y` - The y-component of the vector.
    pub const fn new(x: T, y: T) -> Self { Self { x, y } }

    /// Returns the x-component of the vector.
    pub const fn x(&self) -> T { self.x }

    /// Returns the y-component of the vector.
    pub const fn y(&self) -> T { self.y }
}

impl<T: Float> Vec2D<T> {
    /// Checks whether both components are finite numbers.
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<T> From<(T, T)> for Vec2D<T> {
    /// Creates a `Vec2D` from a tuple of (x, y) values.
    fn from(tuple: (T, T)) -> Self { Vec2D { x: tuple.0, y: tuple.1 } }
}
