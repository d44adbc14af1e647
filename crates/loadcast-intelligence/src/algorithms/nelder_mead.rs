// ABOUTME: Derivative-free Nelder-Mead simplex minimiser used to estimate smoothing parameters
// ABOUTME: Reports non-convergence and non-finite objective values as explicit errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use crate::config::OptimizerConfig;
use thiserror::Error;

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Failure of the simplex search
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizationError {
    /// Start point and step vector disagree in dimension, or are empty
    #[error("invalid search space: {0}")]
    InvalidInput(&'static str),

    /// The objective produced NaN or infinity
    #[error("objective is not finite at {point:?}")]
    NonFinite {
        /// Point at which the objective was evaluated
        point: Vec<f64>,
    },

    /// Iteration budget exhausted before the simplex converged
    #[error("no convergence after {iterations} iterations (best objective {best_value})")]
    NotConverged {
        /// Iterations performed
        iterations: usize,
        /// Best objective value reached
        best_value: f64,
    },
}

/// Minimum located by the search
#[derive(Debug, Clone, PartialEq)]
pub struct Minimum {
    /// Location of the minimum
    pub point: Vec<f64>,
    /// Objective value at `point`
    pub value: f64,
    /// Iterations used
    pub iterations: usize,
}

/// Nelder-Mead simplex minimiser with relative convergence tolerances
#[derive(Debug, Clone, Copy)]
pub struct NelderMead {
    config: OptimizerConfig,
}

impl NelderMead {
    /// Create a minimiser with the given search settings
    #[must_use]
    pub const fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Minimise `objective` starting from `start`.
    ///
    /// The initial simplex is `start` plus one vertex per dimension, displaced by the
    /// matching entry of `steps`. The search has converged once either the spread of
    /// objective values or the spread of vertices falls under its tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error for mismatched inputs, a non-finite objective value, or when
    /// the iteration budget runs out
    pub fn minimize<F>(
        &self,
        objective: F,
        start: &[f64],
        steps: &[f64],
    ) -> Result<Minimum, OptimizationError>
    where
        F: Fn(&[f64]) -> f64,
    {
        if start.is_empty() || start.len() != steps.len() {
            return Err(OptimizationError::InvalidInput(
                "start and steps must be non-empty and equally sized",
            ));
        }

        let evaluate = |point: &[f64]| -> Result<f64, OptimizationError> {
            let value = objective(point);
            if value.is_finite() {
                Ok(value)
            } else {
                Err(OptimizationError::NonFinite {
                    point: point.to_vec(),
                })
            }
        };

        let mut simplex = Self::initial_simplex(start, steps);
        let mut values = simplex
            .iter()
            .map(|vertex| evaluate(vertex))
            .collect::<Result<Vec<_>, _>>()?;

        for iteration in 0..self.config.max_iterations {
            Self::sort(&mut simplex, &mut values);

            if self.converged(&simplex, &values) {
                return Ok(Minimum {
                    point: simplex.swap_remove(0),
                    value: values[0],
                    iterations: iteration,
                });
            }

            let worst = simplex.len() - 1;
            let centroid = Self::centroid(&simplex[..worst]);
            let reflected = Self::towards(&centroid, &simplex[worst], -REFLECTION);
            let reflected_value = evaluate(&reflected)?;

            if reflected_value < values[0] {
                let expanded = Self::towards(&centroid, &simplex[worst], -EXPANSION);
                let expanded_value = evaluate(&expanded)?;
                if expanded_value < reflected_value {
                    simplex[worst] = expanded;
                    values[worst] = expanded_value;
                } else {
                    simplex[worst] = reflected;
                    values[worst] = reflected_value;
                }
                continue;
            }

            if reflected_value < values[worst - 1] {
                simplex[worst] = reflected;
                values[worst] = reflected_value;
                continue;
            }

            // Contract outside when the reflection beat the worst vertex, inside otherwise
            let (contracted, threshold) = if reflected_value < values[worst] {
                (
                    Self::towards(&centroid, &reflected, CONTRACTION),
                    reflected_value,
                )
            } else {
                (
                    Self::towards(&centroid, &simplex[worst], CONTRACTION),
                    values[worst],
                )
            };
            let contracted_value = evaluate(&contracted)?;
            if contracted_value < threshold {
                simplex[worst] = contracted;
                values[worst] = contracted_value;
                continue;
            }

            let best = simplex[0].clone();
            for (vertex, value) in simplex.iter_mut().zip(values.iter_mut()).skip(1) {
                *vertex = Self::towards(&best, vertex, SHRINK);
                *value = evaluate(vertex)?;
            }
        }

        Self::sort(&mut simplex, &mut values);
        Err(OptimizationError::NotConverged {
            iterations: self.config.max_iterations,
            best_value: values[0],
        })
    }

    fn initial_simplex(start: &[f64], steps: &[f64]) -> Vec<Vec<f64>> {
        let mut simplex = Vec::with_capacity(start.len() + 1);
        simplex.push(start.to_vec());
        for (dimension, step) in steps.iter().enumerate() {
            let mut vertex = start.to_vec();
            vertex[dimension] += *step;
            simplex.push(vertex);
        }
        simplex
    }

    fn sort(simplex: &mut Vec<Vec<f64>>, values: &mut Vec<f64>) {
        let mut paired: Vec<(f64, Vec<f64>)> =
            values.drain(..).zip(simplex.drain(..)).collect();
        paired.sort_by(|a, b| a.0.total_cmp(&b.0));
        for (value, vertex) in paired {
            values.push(value);
            simplex.push(vertex);
        }
    }

    fn converged(&self, simplex: &[Vec<f64>], values: &[f64]) -> bool {
        let best_value = values[0];
        let value_spread = values
            .iter()
            .map(|v| (v - best_value).abs())
            .fold(0.0_f64, f64::max);
        if value_spread <= self.config.function_tolerance * (1.0 + best_value.abs()) {
            return true;
        }

        let best = &simplex[0];
        let scale = best.iter().map(|x| x.abs()).fold(0.0_f64, f64::max);
        let point_spread = simplex[1..]
            .iter()
            .flat_map(|vertex| vertex.iter().zip(best).map(|(x, b)| (x - b).abs()))
            .fold(0.0_f64, f64::max);
        point_spread <= self.config.parameter_tolerance * (1.0 + scale)
    }

    fn centroid(vertices: &[Vec<f64>]) -> Vec<f64> {
        let count = vertices.len() as f64;
        let mut centroid = vec![0.0; vertices[0].len()];
        for vertex in vertices {
            for (sum, x) in centroid.iter_mut().zip(vertex) {
                *sum += x;
            }
        }
        centroid.iter_mut().for_each(|sum| *sum /= count);
        centroid
    }

    /// `origin + factor * (target - origin)`
    fn towards(origin: &[f64], target: &[f64], factor: f64) -> Vec<f64> {
        origin
            .iter()
            .zip(target)
            .map(|(o, t)| factor.mul_add(t - o, *o))
            .collect()
    }
}
