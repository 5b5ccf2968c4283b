//! Logistic population growth advanced with a classical fourth-order
//! Runge-Kutta step.

/// Rate of population change under the logistic equation:
/// `r * P * (1 - P / K)`.
pub fn logistic_derivative(population: f64, growth_rate: f64, carrying_capacity: f64) -> f64 {
    growth_rate * population * (1.0 - population / carrying_capacity)
}

/// Advance `population` by one `time_step` of logistic growth using RK4.
///
/// Pure function of its four inputs. Callers must guarantee
/// `carrying_capacity > 0`; a non-positive capacity produces meaningless
/// (possibly non-finite) output rather than an error.
pub fn integrate(
    population: f64,
    time_step: f64,
    growth_rate: f64,
    carrying_capacity: f64,
) -> f64 {
    let k1 = logistic_derivative(population, growth_rate, carrying_capacity);
    let k2 = logistic_derivative(
        population + 0.5 * time_step * k1,
        growth_rate,
        carrying_capacity,
    );
    let k3 = logistic_derivative(
        population + 0.5 * time_step * k2,
        growth_rate,
        carrying_capacity,
    );
    let k4 = logistic_derivative(population + time_step * k3, growth_rate, carrying_capacity);

    population + (time_step / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}
