pub mod aligner; // fast_align child handles (forward/reverse) + output field extraction
pub mod model_params; // hyperparameter recovery from training error logs
pub mod pipeline; // orchestration of the three children
pub mod process; // line-oriented subprocess plumbing shared by all children
pub mod symmetrizer; // atools child handle + heuristic selection
pub mod utils;
