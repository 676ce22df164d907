pub mod solver_client;

pub use solver_client::{HttpSolverClient, Solver};
