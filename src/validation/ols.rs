//! Ordinary least squares on a dense design matrix

use crate::error::{Error, Result};
use nalgebra::{DMatrix, DVector};

/// Fitted linear regression
#[derive(Debug, Clone)]
pub(crate) struct OlsFit {
    pub params: DVector<f64>,
    pub std_errors: DVector<f64>,
    pub ssr: f64,
    pub nobs: usize,
}

impl OlsFit {
    /// Number of regressors, constant included
    pub fn k(&self) -> usize {
        self.params.len()
    }

    /// t-value of coefficient `i`
    pub fn t_value(&self, i: usize) -> f64 {
        self.params[i] / self.std_errors[i]
    }

    /// Gaussian log-likelihood at the fitted parameters
    pub fn log_likelihood(&self) -> f64 {
        let n = self.nobs as f64;
        -n / 2.0 * ((2.0 * std::f64::consts::PI).ln() + (self.ssr / n).ln() + 1.0)
    }

    /// Akaike information criterion
    pub fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood() + 2.0 * self.k() as f64
    }
}

/// Fit `y = X b + e` via the normal equations
pub(crate) fn ols(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<OlsFit> {
    let (nobs, k) = x.shape();
    if nobs <= k {
        return Err(Error::degenerate(format!(
            "{nobs} observations cannot fit {k} regressors"
        )));
    }

    let xt = x.transpose();
    let xtx_inv = (&xt * x)
        .try_inverse()
        .ok_or_else(|| Error::degenerate("singular design matrix"))?;
    let params = &xtx_inv * (&xt * y);

    let residuals = y - x * &params;
    let ssr = residuals.norm_squared();
    if !(ssr > 0.0) || !ssr.is_finite() {
        return Err(Error::degenerate("regression has zero residual variance"));
    }

    let mse = ssr / (nobs - k) as f64;
    let std_errors = xtx_inv.diagonal().map(|v| (mse * v).sqrt());
    if std_errors.iter().any(|se| !(*se > 0.0)) {
        return Err(Error::degenerate("non-positive coefficient variance"));
    }

    Ok(OlsFit {
        params,
        std_errors,
        ssr,
        nobs,
    })
}
