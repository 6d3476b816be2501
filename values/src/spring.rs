use std::ops::{Add, Mul, Sub};

use glam::Vec3;

/// Longest time slice [`Spring::step`] will integrate in a single call.
///
/// A window that loses focus and returns can hand the caller a huge frame
/// delta; integrating it in one piece would launch the spring to a
/// ridiculous value.
pub const MAX_STEP_SECONDS: f32 = 0.1;

/// Default spring constant, suitable for values in roughly the 1..10 range.
pub const DEFAULT_STIFFNESS: f32 = 10.0;

/// Default damping, applied as a multiple of the current velocity.
pub const DEFAULT_DAMPING: f32 = 1.0;

/// A single value driven toward a target by a damped spring.
///
/// The force model is `F = k*x - c*v` with an assumed mass of 1, where `x`
/// is the distance to the target, `k` the spring constant, `c` the damping,
/// and `v` the velocity. The spring does not update itself; callers step it
/// with their frame delta.
#[derive(Clone, Copy, Debug)]
pub struct Spring<T> {
    /// The value the spring is pulling toward.
    pub target: T,
    /// The current integrated value.
    pub current: T,
    /// The current velocity.
    pub velocity: T,
    /// Spring constant `k`. Higher values pull harder toward the target.
    pub stiffness: f32,
    /// Damping `c`, in multiples of velocity.
    pub damping: f32,
}

/// Spring over a single `f32` parameter.
pub type SpringF32 = Spring<f32>;

/// Spring over a three-component vector.
pub type SpringVec3 = Spring<Vec3>;

impl<T> Spring<T>
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    /// Creates a spring at rest at `T::default()` with the given constants.
    #[must_use]
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            target: T::default(),
            current: T::default(),
            velocity: T::default(),
            stiffness,
            damping,
        }
    }

    /// Steps the spring forward by `dt` seconds, capping the delta at
    /// [`MAX_STEP_SECONDS`].
    pub fn step(&mut self, dt: f32) {
        self.step_uncapped(dt.min(MAX_STEP_SECONDS));
    }

    /// Steps the spring forward by exactly `dt` seconds with no cap.
    pub fn step_uncapped(&mut self, dt: f32) {
        let difference = self.target - self.current;
        let force = difference * self.stiffness - self.velocity * self.damping;
        self.velocity = self.velocity + force * dt;
        self.current = self.current + self.velocity * dt;
    }
}

impl<T> Default for Spring<T>
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    fn default() -> Self {
        Self::new(DEFAULT_STIFFNESS, DEFAULT_DAMPING)
    }
}
