//! Discrete PID controller as a single recurrence.
//!
//! The velocity form of the PID law, collapsed to a unit sample interval:
//!
//! ```text
//! y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] + y[n-1]
//!
//! b0 = Kp + Ki + Kd
//! b1 = -Kp - 2*Kd
//! b2 = Kd
//! ```
//!
//! `x` is the control error, `y` the actuator command. The gains are per
//! sample: for a sample period `Ts`, scale `Ki` by `Ts` and `Kd` by `1/Ts`
//! before passing them in.

use crate::sample::{Coefficient, Sample};

/// PID controller over samples `T` with gain type `C`.
///
/// # Example
///
/// ```rust
/// use tapline_core::Pid;
///
/// // Pure integrator (Ki = 0.5)
/// let mut pid = Pid::<f32, f32>::new(0.0, 0.5, 0.0);
///
/// assert_eq!(pid.process(1.0), 0.5);
/// assert_eq!(pid.process(1.0), 1.0);
///
/// // Bumpless hand-off from a manual command
/// pid.set_output(10.0);
/// assert_eq!(pid.process(0.0), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct Pid<T, C> {
    b0: C,
    b1: C,
    b2: C,
    x1: T,
    x2: T,
    y1: T,
}

impl<T: Sample<C>, C: Coefficient> Pid<T, C> {
    /// Creates a controller from proportional, integral and derivative gains.
    pub fn new(kp: C, ki: C, kd: C) -> Self {
        let [b0, b1, b2] = recurrence_weights(kp, ki, kd);
        Self {
            b0,
            b1,
            b2,
            x1: T::zero(),
            x2: T::zero(),
            y1: T::zero(),
        }
    }

    /// Creates a controller from `[kp, ki, kd]`.
    pub fn from_gains([kp, ki, kd]: [C; 3]) -> Self {
        Self::new(kp, ki, kd)
    }

    /// Re-derives the recurrence weights. State is kept.
    pub fn set_gains(&mut self, kp: C, ki: C, kd: C) {
        [self.b0, self.b1, self.b2] = recurrence_weights(kp, ki, kd);
        #[cfg(feature = "tracing")]
        tracing::debug!("pid: gains updated");
    }

    /// Recurrence weights `[b0, b1, b2]`.
    pub fn weights(&self) -> [C; 3] {
        [self.b0, self.b1, self.b2]
    }

    /// Zeroes both input-history cells and the output cell.
    pub fn clear(&mut self) {
        self.x1 = T::zero();
        self.x2 = T::zero();
        self.y1 = T::zero();
    }

    /// Overwrites the previous output, leaving the input history alone.
    pub fn set_output(&mut self, value: T) {
        self.y1 = value;
    }

    /// Most recent output (`y[n-1]`), without advancing.
    pub fn output(&self) -> T {
        self.y1
    }

    /// Advances one sample with control error `error` and returns the new command.
    #[inline]
    pub fn process(&mut self, error: T) -> T {
        let y = error * self.b0 + self.x1 * self.b1 + self.x2 * self.b2 + self.y1;
        self.x2 = self.x1;
        self.x1 = error;
        self.y1 = y;
        y
    }
}

impl<T: Sample<C>, C: Coefficient> Default for Pid<T, C> {
    /// All weights zero: the output holds at zero until retuned.
    fn default() -> Self {
        Self::new(C::zero(), C::zero(), C::zero())
    }
}

fn recurrence_weights<C: Coefficient>(kp: C, ki: C, kd: C) -> [C; 3] {
    [kp + ki + kd, C::zero() - kp - kd - kd, kd]
}
