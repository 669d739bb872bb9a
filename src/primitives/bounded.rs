//! Bounded - macro for range-constrained numeric tuning knobs
//!
//! `new` validates in const contexts; `clamped` never fails.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Damping, 0.0, 1.0);
/// let d = Damping::new(0.1);
/// let d2 = Damping::clamped(4.0);  // Damping(1.0)
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            pub fn clamped(value: f32) -> Self {
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f32 {
                self.0
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let raw = <f32 as serde::Deserialize>::deserialize(d)?;
                Ok(Self::clamped(raw))
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = f32;
            fn mul(self, rhs: $name) -> f32 {
                self * rhs.value()
            }
        }
    };
}

pub(crate) use bounded_f32;
