//! Text rendering of points, tasks, and task results.
//!
//! The arithmetic core never produces strings; everything printable goes
//! through here. Prime-field elements render as decimal integers and
//! binary-field elements as the decimal value of their coefficient bit
//! vector, so both field families share one output shape.

use num_bigint::BigInt;

use crate::elliptic_curve::Point;
use crate::polynomial::Polynomial;
use crate::task::{Task, TaskResult, TaskResults};

/// How a field element appears in task output.
pub trait FormatElement {
    fn format_element(&self) -> String;
}

impl FormatElement for BigInt {
    fn format_element(&self) -> String {
        self.to_string()
    }
}

impl FormatElement for Polynomial {
    fn format_element(&self) -> String {
        self.bits().to_string()
    }
}

/// `(x, y)` for affine points, `O` for the point at infinity.
pub fn format_point<T: FormatElement>(point: &Point<T>) -> String {
    match point {
        Point::Infinity => "O".to_string(),
        Point::Affine { x, y } => format!("({}, {})", x.format_element(), y.format_element()),
    }
}

/// `P + Q` for additions, `P * k` for multiplications.
pub fn format_task<T: FormatElement>(task: &Task<T>) -> String {
    match task {
        Task::Add(p, q) => format!("{} + {}", format_point(p), format_point(q)),
        Task::Mul(p, scalar) => format!("{} * {}", format_point(p), scalar),
    }
}

/// One output line: `<task> = <result>`.
pub fn format_result<T: FormatElement>(result: &TaskResult<T>) -> String {
    format!("{} = {}", format_task(&result.task), format_point(&result.result))
}

/// All output lines for one file's run, in task order.
pub fn format_results(results: &TaskResults) -> Vec<String> {
    match results {
        TaskResults::Zp(results) => results.iter().map(format_result).collect(),
        TaskResults::Binary(results) => results.iter().map(format_result).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_format_zp_points() {
        let p = Point::affine(BigInt::from(3), BigInt::from(10));
        assert_eq!(format_point(&p), "(3, 10)");
        assert_eq!(format_point(&Point::<BigInt>::infinity()), "O");
    }

    #[test]
    fn test_format_binary_points_as_bit_values() {
        let p = Point::affine(Polynomial::from_u64(0b1010), Polynomial::from_u64(0b11));
        assert_eq!(format_point(&p), "(10, 3)");
    }

    #[test]
    fn test_format_tasks_and_results() {
        let p = Point::affine(BigInt::from(3), BigInt::from(10));
        let q = Point::affine(BigInt::from(4), BigInt::from(0));

        let add = Task::Add(p.clone(), q.clone());
        assert_eq!(format_task(&add), "(3, 10) + (4, 0)");

        let mul = Task::Mul(p.clone(), BigUint::from(5u32));
        assert_eq!(format_task(&mul), "(3, 10) * 5");

        let result = TaskResult {
            task: add,
            result: Point::affine(BigInt::from(1), BigInt::from(16)),
        };
        assert_eq!(format_result(&result), "(3, 10) + (4, 0) = (1, 16)");
    }
}
