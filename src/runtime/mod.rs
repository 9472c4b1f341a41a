//! Runtime execution for LOOP programs

mod evaluator;
mod store;

pub use evaluator::{Evaluator, EvaluatorConfig};
pub use store::{VariableStore, OUTPUT};
