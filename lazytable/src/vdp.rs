//! Euler's method on the Van der Pol oscillator, as a convergence table.

use lazytablelib::{row, Row};

/// Column headers of the convergence table
pub const HEADERS: [&str; 4] = ["Steps", "Value", "Delta", "Order"];

/// Van der Pol oscillator `x'' = mu (1 - x^2) x' - x` with initial
/// conditions and integration horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanDerPol {
    pub init_pos: f64,
    pub init_vel: f64,
    pub final_time: f64,
    pub damping_strength: f64,
}

impl Default for VanDerPol {
    fn default() -> Self {
        Self {
            init_pos: 2.0,
            init_vel: 0.0,
            final_time: 16.0,
            damping_strength: 1.0,
        }
    }
}

impl VanDerPol {
    fn dynamics(&self, [pos, vel]: [f64; 2]) -> [f64; 2] {
        [
            vel,
            self.damping_strength * (1.0 - pos * pos) * vel - pos,
        ]
    }

    /// State `[position, velocity]` at `final_time` after `n_steps` explicit
    /// Euler steps.
    pub fn solve(&self, n_steps: u64) -> [f64; 2] {
        let h = self.final_time / n_steps as f64;
        let mut state = [self.init_pos, self.init_vel];
        for _ in 0..n_steps {
            let [dpos, dvel] = self.dynamics(state);
            state = [state[0] + h * dpos, state[1] + h * dvel];
        }
        state
    }

    /// Convergence table: `n_rows` solves, doubling the step count each row
    /// starting from `init_n_steps`.
    pub fn convergence_table(&self, init_n_steps: u64, n_rows: usize) -> ConvergenceTable {
        ConvergenceTable {
            system: *self,
            n_steps: Some(init_n_steps),
            remaining: n_rows,
            prev_value: f64::NAN,
            prev_delta: f64::NAN,
        }
    }
}

/// Lazily computed rows `[steps, value, delta, order]`.
///
/// `delta` is the change in final position from the previous row and
/// `order` the observed convergence order `log2(prev_delta / delta)`; both
/// are NaN until enough rows exist.
#[derive(Debug, Clone)]
pub struct ConvergenceTable {
    system: VanDerPol,
    n_steps: Option<u64>,
    remaining: usize,
    prev_value: f64,
    prev_delta: f64,
}

impl Iterator for ConvergenceTable {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.remaining == 0 {
            return None;
        }
        // step count overflowed on the previous doubling
        let n_steps = self.n_steps?;

        let [value, _] = self.system.solve(n_steps);
        let delta = value - self.prev_value;
        let order = (self.prev_delta / delta).log2();

        self.prev_value = value;
        self.prev_delta = delta;
        self.n_steps = n_steps.checked_mul(2);
        self.remaining -= 1;

        Some(row![n_steps, value, delta, order])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
