//! Task descriptions and the per-file runner.
//!
//! A parsed input file yields one [`RunnerConfig`]: the constructed curve
//! for one of the three supported families plus the ordered task list.
//! Running evaluates every task sequentially and pairs each with its
//! result, so the formatter can render `task = result` lines. The first
//! computation error aborts the file; arithmetic is never retried.

use num_bigint::{BigInt, BigUint};

use crate::binary_elliptic_curve::{NonSupersingularCurve, SupersingularCurve};
use crate::elliptic_curve::{CurveGroup, Point, WeierstrassCurve};
use crate::error::Result;
use crate::field::Field;
use crate::polynomial::Polynomial;

/// One calculation request: add two points, or multiply a point by a
/// non-negative scalar.
#[derive(Clone, Debug, PartialEq)]
pub enum Task<T> {
    Add(Point<T>, Point<T>),
    Mul(Point<T>, BigUint),
}

/// A task together with the point it evaluated to.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskResult<T> {
    pub task: Task<T>,
    pub result: Point<T>,
}

/// Evaluate tasks in input order against one curve.
pub fn run_tasks<C: CurveGroup>(
    curve: &C,
    tasks: &[Task<<C::Field as Field>::Element>],
) -> Result<Vec<TaskResult<<C::Field as Field>::Element>>> {
    tasks
        .iter()
        .map(|task| {
            let result = match task {
                Task::Add(p, q) => curve.add(p, q)?,
                Task::Mul(p, scalar) => curve.mul(p, scalar)?,
            };
            Ok(TaskResult { task: task.clone(), result })
        })
        .collect()
}

/// A fully parsed input file: the curve variant and its task list.
///
/// The three curve families form a closed set, so dispatch is a plain
/// enumeration rather than trait objects.
#[derive(Clone, Debug)]
pub enum RunnerConfig {
    Weierstrass {
        curve: WeierstrassCurve,
        tasks: Vec<Task<BigInt>>,
    },
    NonSupersingular {
        curve: NonSupersingularCurve,
        tasks: Vec<Task<Polynomial>>,
    },
    Supersingular {
        curve: SupersingularCurve,
        tasks: Vec<Task<Polynomial>>,
    },
}

/// Results of one file's run, still typed by field element.
#[derive(Clone, Debug)]
pub enum TaskResults {
    Zp(Vec<TaskResult<BigInt>>),
    Binary(Vec<TaskResult<Polynomial>>),
}

impl RunnerConfig {
    pub fn run(&self) -> Result<TaskResults> {
        match self {
            RunnerConfig::Weierstrass { curve, tasks } => {
                run_tasks(curve, tasks).map(TaskResults::Zp)
            }
            RunnerConfig::NonSupersingular { curve, tasks } => {
                run_tasks(curve, tasks).map(TaskResults::Binary)
            }
            RunnerConfig::Supersingular { curve, tasks } => {
                run_tasks(curve, tasks).map(TaskResults::Binary)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PrimeField;

    fn point(x: i64, y: i64) -> Point<BigInt> {
        Point::affine(BigInt::from(x), BigInt::from(y))
    }

    #[test]
    fn test_results_preserve_input_order() {
        let curve = WeierstrassCurve::new(
            PrimeField::new(BigInt::from(23)),
            BigInt::from(1),
            BigInt::from(1),
        );
        let tasks = vec![
            Task::Add(point(3, 10), point(3, 10)),
            Task::Mul(point(3, 10), BigUint::from(0u32)),
            Task::Add(point(3, 10), point(4, 0)),
        ];

        let results = run_tasks(&curve, &tasks).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].task, tasks[0]);
        assert_eq!(results[0].result, point(7, 12));
        assert_eq!(results[1].result, Point::infinity());
        assert_eq!(results[2].result, point(1, 16));
    }

    #[test]
    fn test_first_error_aborts_the_file() {
        let curve = WeierstrassCurve::new(
            PrimeField::new(BigInt::from(23)),
            BigInt::from(1),
            BigInt::from(1),
        );
        // Doubling (4, 0) divides by zero; the run yields no partial results
        let tasks = vec![
            Task::Add(point(4, 0), point(4, 0)),
            Task::Add(point(3, 10), point(4, 0)),
        ];
        assert!(run_tasks(&curve, &tasks).is_err());
    }
}
