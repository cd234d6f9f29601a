pub mod correios;
pub mod heuristic;

pub use correios::CorreiosProvider;
pub use heuristic::HeuristicProvider;
