/// Periodic cubic spline through a closed loop of points.
///
/// Knots are uniformly spaced over `[0, 1]`, with the first point repeated at
/// `u = 1`, so value and slope match where the loop wraps.
#[derive(Debug, Clone)]
pub struct PeriodicSpline {
    points: Vec<(f64, f64)>,
    /// Second derivatives per knot, x and y.
    curvature: Vec<(f64, f64)>,
}

impl PeriodicSpline {
    /// Fit the spline. Returns `None` for an empty input.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let n = points.len();
        let curvature = if n < 3 {
            vec![(0.0, 0.0); n]
        } else {
            let rhs = |coord: fn(&(f64, f64)) -> f64| -> Vec<f64> {
                (0..n)
                    .map(|i| {
                        let prev = coord(&points[(i + n - 1) % n]);
                        let next = coord(&points[(i + 1) % n]);
                        6.0 * (next - 2.0 * coord(&points[i]) + prev)
                    })
                    .collect()
            };
            let mx = solve_cyclic(&rhs(|p| p.0));
            let my = solve_cyclic(&rhs(|p| p.1));
            mx.into_iter().zip(my).collect()
        };
        Some(Self {
            points: points.to_vec(),
            curvature,
        })
    }

    pub fn knot_count(&self) -> usize {
        self.points.len()
    }

    /// Evaluate at `u` in `[0, 1]`; values outside are clamped.
    pub fn eval(&self, u: f64) -> (f64, f64) {
        let n = self.points.len();
        let t = u.clamp(0.0, 1.0) * n as f64;
        let i = (t.floor() as usize).min(n - 1);
        let j = (i + 1) % n;
        let s = t - i as f64;
        let r = 1.0 - s;

        let (p0, p1) = (self.points[i], self.points[j]);
        let (m0, m1) = (self.curvature[i], self.curvature[j]);
        let w0 = (r * r * r - r) / 6.0;
        let w1 = (s * s * s - s) / 6.0;
        (
            r * p0.0 + s * p1.0 + w0 * m0.0 + w1 * m1.0,
            r * p0.1 + s * p1.1 + w0 * m0.1 + w1 * m1.1,
        )
    }

    /// Evaluate at `count` evenly spaced parameters from 0 to 1 inclusive.
    pub fn resample(&self, count: usize) -> Vec<(f64, f64)> {
        crate::plot::palette::linspace(count)
            .into_iter()
            .map(|u| self.eval(u))
            .collect()
    }
}

/// Solve the cyclic system `m[i-1] + 4 m[i] + m[i+1] = rhs[i]` (indices mod n).
///
/// Sherman-Morrison reduction to two plain tridiagonal solves. Needs n >= 3.
fn solve_cyclic(rhs: &[f64]) -> Vec<f64> {
    let n = rhs.len();
    let gamma = -4.0;
    let mut diag = vec![4.0; n];
    diag[0] -= gamma;
    diag[n - 1] -= 1.0 / gamma;

    let x = solve_tridiagonal(&diag, rhs);
    let mut u = vec![0.0; n];
    u[0] = gamma;
    u[n - 1] = 1.0;
    let z = solve_tridiagonal(&diag, &u);

    let fact = (x[0] + x[n - 1] / gamma) / (1.0 + z[0] + z[n - 1] / gamma);
    x.iter().zip(&z).map(|(xi, zi)| xi - fact * zi).collect()
}

/// Thomas algorithm for unit off-diagonals.
fn solve_tridiagonal(diag: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];
    c[0] = 1.0 / diag[0];
    d[0] = rhs[0] / diag[0];
    for i in 1..n {
        let m = diag[i] - c[i - 1];
        c[i] = 1.0 / m;
        d[i] = (rhs[i] - d[i - 1]) / m;
    }
    let mut x = vec![0.0; n];
    x[n - 1] = d[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d[i] - c[i] * x[i + 1];
    }
    x
}
