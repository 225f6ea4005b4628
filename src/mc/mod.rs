pub mod mc_engine;
pub mod path;

pub use mc_engine::{
    generate_batch, generate_batch_parallel, generate_path, generate_path_with,
    SimulationParameters,
};
pub use path::{PathBatch, PricePath};
