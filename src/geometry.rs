//! This module contains everything related to the sampled region: points, the target circle, the
//! box points are drawn from and the affine maps that place uniform random numbers into that box.
use crate::error::{Error, Result};
use num_traits::Float;
use serde::{Deserialize, Deserializer, Serialize};

/// A point in the plane.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Constructor.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// The circle whose area ratio to the sampled box yields $\pi / 4$.
///
/// A circle is validated once on construction and never changes afterwards. Deserialization goes
/// through [`Circle::new`] as well.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle<T> {
    center: Point<T>,
    radius: T,
}

impl<T: Float> Circle<T> {
    /// Constructs a circle around `center` with the given `radius`. Fails with
    /// [`Error::InvalidCircle`] unless the radius is strictly positive and all values are finite.
    pub fn new(center: Point<T>, radius: T) -> Result<Self> {
        let finite = center.x.is_finite() && center.y.is_finite() && radius.is_finite();

        if !finite || radius <= T::zero() {
            return Err(Error::InvalidCircle {
                radius: radius.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    pub fn center(&self) -> Point<T> {
        self.center
    }

    /// Returns the radius of the circle.
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Returns `true` if `point` lies inside the circle or on its boundary.
    ///
    /// The test is $(x_p - x_0)^2 + (y_p - y_0)^2 - r^2 < \epsilon$, where $\epsilon$ is the
    /// machine epsilon of `T`, so points within one epsilon outside the boundary count as inside.
    pub fn contains(&self, point: Point<T>) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;

        dx.powi(2) + dy.powi(2) - self.radius.powi(2) < T::epsilon()
    }

    /// Returns the box that points are sampled from.
    ///
    /// The box is the square $[x_0, x_0 + r] \times [y_0, y_0 + r]$: it has side $r$ and is
    /// anchored at the center, so it covers exactly one quadrant of the circle. This anchoring is
    /// kept for compatibility with earlier results; the textbook square of side $2r$ centered on
    /// the circle is not used.
    pub fn bounding_box(&self) -> BoundingBox<T> {
        BoundingBox {
            min: self.center,
            max: Point::new(self.center.x + self.radius, self.center.y + self.radius),
        }
    }
}

impl<'de, T> Deserialize<'de> for Circle<T>
where
    T: Float + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Fields<U> {
            center: Point<U>,
            radius: U,
        }

        let fields = Fields::deserialize(deserializer)?;
        Self::new(fields.center, fields.radius).map_err(serde::de::Error::custom)
    }
}

/// An axis-aligned box given by its lower-left and upper-right corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBox<T> {
    min: Point<T>,
    max: Point<T>,
}

impl<T: Float> BoundingBox<T> {
    /// Returns the lower-left corner.
    pub fn min(&self) -> Point<T> {
        self.min
    }

    /// Returns the upper-right corner.
    pub fn max(&self) -> Point<T> {
        self.max
    }

    /// Returns the area of the box.
    pub fn area(&self) -> T {
        (self.max.x - self.min.x) * (self.max.y - self.min.y)
    }

    /// Get a sampler that maps pairs of uniform random numbers into this box.
    pub fn sampler(&self) -> PointSampler<T> {
        PointSampler::new(
            Scaler::new(self.min.x, self.max.x),
            Scaler::new(self.min.y, self.max.y),
        )
    }
}

/// Affine map from $[0, 1)$ onto the interval from `min` to `max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Scaler<T> {
    min: T,
    max: T,
}

impl<T: Float> Scaler<T> {
    /// Constructor.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Maps `u` to `(max - min) * u + min`.
    pub fn scale(&self, u: T) -> T {
        (self.max - self.min) * u + self.min
    }
}

/// Places two uniform random numbers into a box, one scaler per axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointSampler<T> {
    x: Scaler<T>,
    y: Scaler<T>,
}

impl<T: Float> PointSampler<T> {
    /// Constructor.
    pub fn new(x: Scaler<T>, y: Scaler<T>) -> Self {
        Self { x, y }
    }

    /// Returns the point `(scale_x(u), scale_y(v))`.
    pub fn point(&self, u: T, v: T) -> Point<T> {
        Point::new(self.x.scale(u), self.y.scale(v))
    }
}
