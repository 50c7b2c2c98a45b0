//! Plain-text rendering of arrays, scalars and section banners.

use crate::ops::shape_of;

use ndarray::{ArrayBase, Axis, Data, Ix1, Ix2, Ix3};
use std::fmt::Display;

/// Decimal places used for array entries. Integers ignore it.
pub const ENTRY_PRECISION: usize = 4;
/// Decimal places used for reported scalars.
pub const SCALAR_PRECISION: usize = 6;

const SEPARATOR: &str = "============================================================";

/// Title framed by separator lines.
pub fn banner(title: &str) -> String {
    format!("{SEPARATOR}\n  {title}\n{SEPARATOR}\n")
}

/// A scalar to six decimal places.
pub fn scalar(value: f64) -> String {
    format!("{:.*}", SCALAR_PRECISION, value)
}

fn cell<A: Display>(value: &A) -> String {
    format!("{:.*}", ENTRY_PRECISION, value)
}

/// `[1, 2, 3]` style rendering of a vector.
pub fn vector<A, S>(v: &ArrayBase<S, Ix1>) -> String
where
    A: Display,
    S: Data<Elem = A>,
{
    let cells: Vec<String> = v.iter().map(cell).collect();
    format!("[{}]", cells.join(", "))
}

/// Row-per-line grid with right-aligned columns.
pub fn matrix<A, S>(m: &ArrayBase<S, Ix2>) -> String
where
    A: Display,
    S: Data<Elem = A>,
{
    if m.nrows() == 0 {
        return "[]".to_string();
    }
    let rows: Vec<Vec<String>> = m
        .outer_iter()
        .map(|row| row.iter().map(cell).collect())
        .collect();
    let width = rows.iter().flatten().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        out.push_str(if i == 0 { "[[" } else { " [" });
        let padded: Vec<String> = row.iter().map(|c| format!("{c:>width$}")).collect();
        out.push_str(&padded.join(", "));
        out.push(']');
        if i + 1 == rows.len() {
            out.push(']');
        } else {
            out.push_str(",\n");
        }
    }
    out
}

/// Every trailing-axis slice `[:, :, i]` of a 3-D array, one grid each.
pub fn tensor3<A, S>(t: &ArrayBase<S, Ix3>) -> String
where
    A: Display,
    S: Data<Elem = A>,
{
    let mut out = format!("shape={}", shape_of(t));
    for (i, slice) in t.axis_iter(Axis(2)).enumerate() {
        out.push_str(&format!("\n[:, :, {i}] =\n{}", matrix(&slice)));
    }
    out
}

/// `label:` followed by the body on the next line.
pub fn labeled(label: &str, body: &str) -> String {
    format!("{label}:\n{body}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2, Array3};

    #[test]
    fn test_banner() {
        let b = banner("Demo");
        let lines: Vec<&str> = b.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], lines[2]);
        assert!(lines[0].chars().all(|c| c == '='));
        assert_eq!(lines[1].trim(), "Demo");
    }

    #[test]
    fn test_scalar_precision() {
        assert_eq!(scalar(1.0), "1.000000");
        assert_eq!(scalar(0.1234567), "0.123457");
    }

    #[test]
    fn test_vector() {
        assert_eq!(vector(&arr1(&[1i64, 2, 3])), "[1, 2, 3]");
        assert_eq!(vector(&arr1(&[0.5, 1.25])), "[0.5000, 1.2500]");
    }

    #[test]
    fn test_matrix_alignment() {
        let m = arr2(&[[1i64, 200], [30, 4]]);
        assert_eq!(matrix(&m), "[[  1, 200],\n [ 30,   4]]");
    }

    #[test]
    fn test_matrix_floats() {
        let m = arr2(&[[1.0, 2.5]]);
        assert_eq!(matrix(&m), "[[1.0000, 2.5000]]");
    }

    #[test]
    fn test_tensor3_lists_every_slice() {
        let t = Array3::<i64>::zeros((2, 2, 3));
        let out = tensor3(&t);
        assert!(out.starts_with("shape=(2, 2, 3)"));
        assert!(out.contains("[:, :, 0] ="));
        assert!(out.contains("[:, :, 2] ="));
        assert!(!out.contains("[:, :, 3] ="));
    }

    #[test]
    fn test_labeled() {
        assert_eq!(labeled("x", "[1]"), "x:\n[1]\n");
    }
}
