//! Text output shared by the command line programs

use std::io::{self, Write};

use ndarray::Array1;
use polyfit_testfunctions::PolynomialApproximate;

/// One `x y fitted` line per sample point, every value with six decimals.
pub fn write_fit<W: Write>(out: &mut W, pa: &PolynomialApproximate, w: &Array1<f64>) -> io::Result<()> {
	let fitted = pa.eval(w);
	for ((x, y), f) in pa.x().iter().zip(pa.y().iter()).zip(fitted.iter()) {
		writeln!(out, "{:.6} {:.6} {:.6}", x, y, f)?;
	}
	out.flush()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_one_line_per_sample() {
		let pa = PolynomialApproximate::new(5).unwrap();
		let mut buf = Vec::new();
		write_fit(&mut buf, &pa, &Array1::from(vec![0.5, 1.0])).unwrap();
		let text = String::from_utf8(buf).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 5);
		assert_eq!(lines[0], "0.000000 0.000000 0.500000");
		assert_eq!(lines[1], "0.250000 1.000000 0.750000");
		assert_eq!(lines[4], "1.000000 -0.000000 1.500000");
	}
}
