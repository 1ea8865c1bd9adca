use crate::error::VectorError;

/// A 2D vector used for position, velocity and steering forces
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `angle` radians from the +x axis
    pub fn from_angle(angle: f64) -> Self {
        Self {
            x: libm::cos(angle),
            y: libm::sin(angle),
        }
    }

    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y)
    }

    /// Returns the unit vector in the same direction, or the zero vector
    /// when the magnitude is zero.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    /// Rescales to `max` when the magnitude exceeds it.
    pub fn limit(&self, max: f64) -> Self {
        if self.magnitude() > max {
            self.normalize() * max
        } else {
            *self
        }
    }

    pub fn distance(&self, other: &Vector2D) -> f64 {
        (*self - *other).magnitude()
    }

    pub fn checked_div(&self, scalar: f64) -> Result<Self, VectorError> {
        if scalar == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(*self / scalar)
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Unchecked division. Callers guard the divisor; use
/// [`Vector2D::checked_div`] when it may be zero.
impl core::ops::Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl core::ops::SubAssign for Vector2D {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2d_new() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_vector2d_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_vector2d_normalize() {
        let v = Vector2D::new(3.0, 4.0);
        let normalized = v.normalize();
        assert!((normalized.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(normalized, Vector2D::new(0.6, 0.8));
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vector2D::zero().normalize(), Vector2D::zero());
    }

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2D::new(1.5, 2.0));
        assert_eq!(-v1, Vector2D::new(-1.0, -2.0));

        let mut acc = v1;
        acc += v2;
        acc -= Vector2D::new(1.0, 1.0);
        assert_eq!(acc, Vector2D::new(3.0, 5.0));
    }

    #[test]
    fn test_distance() {
        let a = Vector2D::new(1.0, 1.0);
        let b = Vector2D::new(4.0, 5.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn test_checked_div_by_zero() {
        let v = Vector2D::new(1.0, 2.0);
        assert_eq!(v.checked_div(0.0), Err(VectorError::DivisionByZero));
        assert_eq!(v.checked_div(2.0), Ok(Vector2D::new(0.5, 1.0)));
    }

    #[test]
    fn test_limit() {
        let v = Vector2D::new(30.0, 40.0);
        let limited = v.limit(5.0);
        assert!((limited.magnitude() - 5.0).abs() < 1e-12);
        assert_eq!(Vector2D::new(0.3, 0.4).limit(5.0), Vector2D::new(0.3, 0.4));
    }

    #[test]
    fn test_from_angle_is_unit() {
        for i in 0..16 {
            let v = Vector2D::from_angle(i as f64 * 0.4);
            assert!((v.magnitude() - 1.0).abs() < 1e-12);
        }
    }
}
