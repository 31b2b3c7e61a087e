//! Threshold function types.

/// [Activation function](https://en.wikipedia.org/wiki/Activation_function)
/// types.
///
/// Every variant pairs a squashing function with its exact derivative; the
/// backward pass relies on the two agreeing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Activator {
    /// Logistic sigmoid, `1 / (1 + e^-x)`.
    Sigmoid,
    /// Hyperbolic tan function
    TanH,
}

impl Default for Activator {
    fn default() -> Self {
        Activator::Sigmoid
    }
}

impl Activator {
    /// Evaluates `f(x)` for the selected activation function.
    pub fn f(&self, x: f64) -> f64 {
        match *self {
            Activator::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activator::TanH => x.tanh(),
        }
    }

    /// Evaluates the derivative `f'(x)` at the weighted sum `x`.
    ///
    /// Takes the *input* of the activation function and re-evaluates `f(x)`
    /// rather than reusing a cached output.
    pub fn fprime(&self, x: f64) -> f64 {
        let y = self.f(x);
        match *self {
            Activator::Sigmoid => (1.0 - y) * y,
            Activator::TanH => 1.0 - y * y,
        }
    }
}
