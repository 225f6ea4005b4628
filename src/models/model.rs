// src/models/model.rs
/// Discrete-time price model driven by one standard normal shock per step
pub trait ReturnModel {
    /// Log return of a single step given the normal shock `z`
    fn step_return(&self, z: f64) -> f64;

    /// Advance `price` by one step
    fn step(&self, price: f64, z: f64) -> f64 {
        price * self.step_return(z).exp()
    }
}
