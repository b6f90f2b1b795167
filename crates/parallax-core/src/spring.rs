//! Damped springs that chase a target value frame by frame.
//!
//! A spring keeps `(value, velocity, target)` and is advanced explicitly with
//! [`Spring::step`]. Integration runs in fixed 1 ms sub-steps (semi-implicit
//! Euler), so the result does not depend on how the frame time is sliced.

use glam::Vec2;
use std::ops::{Add, Mul, Sub};

/// Quantities a spring can animate.
pub trait SpringValue:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    const ZERO: Self;
    /// Largest absolute component, used for the settle check.
    fn max_abs(self) -> f32;
}

impl SpringValue for f32 {
    const ZERO: Self = 0.0;
    fn max_abs(self) -> f32 {
        self.abs()
    }
}

impl SpringValue for Vec2 {
    const ZERO: Self = Vec2::ZERO;
    fn max_abs(self) -> f32 {
        self.abs().max_element()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
    /// Displacement and speed below which the spring snaps to its target.
    pub precision: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: 170.0,
            friction: 26.0,
            mass: 1.0,
            precision: 0.01,
        }
    }
}

const STEP_SEC: f32 = 0.001;
// Long stalls (tab in background) would otherwise integrate thousands of steps.
const MAX_FRAME_SEC: f32 = 0.1;

#[derive(Clone, Debug)]
pub struct Spring<T: SpringValue> {
    value: T,
    velocity: T,
    target: T,
    config: SpringConfig,
    settled: bool,
}

impl<T: SpringValue> Spring<T> {
    pub fn new(value: T) -> Self {
        Self::with_config(value, SpringConfig::default())
    }

    pub fn with_config(value: T, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: T::ZERO,
            target: value,
            config,
            settled: true,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn velocity(&self) -> T {
        self.velocity
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn set_target(&mut self, target: T) {
        self.target = target;
        self.settled = (target - self.value).max_abs() < self.config.precision
            && self.velocity.max_abs() < self.config.precision;
        if self.settled {
            self.value = target;
            self.velocity = T::ZERO;
        }
    }

    /// Jump straight to `value` with no motion.
    pub fn reset(&mut self, value: T) {
        self.value = value;
        self.target = value;
        self.velocity = T::ZERO;
        self.settled = true;
    }

    /// Advance by `dt_sec`. Returns `true` once the spring has come to rest.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        if self.settled {
            return true;
        }
        let dt = dt_sec.clamp(0.0, MAX_FRAME_SEC);
        let steps = (dt / STEP_SEC).ceil() as u32;
        let h = if steps > 0 { dt / steps as f32 } else { 0.0 };
        let SpringConfig {
            tension,
            friction,
            mass,
            precision,
        } = self.config;
        for _ in 0..steps {
            let displacement = self.value - self.target;
            let accel = (displacement * -tension - self.velocity * friction) * (1.0 / mass);
            self.velocity = self.velocity + accel * h;
            self.value = self.value + self.velocity * h;

            if (self.value - self.target).max_abs() < precision
                && self.velocity.max_abs() < precision
            {
                self.value = self.target;
                self.velocity = T::ZERO;
                self.settled = true;
                break;
            }
        }
        self.settled
    }
}
