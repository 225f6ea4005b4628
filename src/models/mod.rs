pub mod gbm;
pub mod model;

pub use gbm::DailyGbm;
pub use model::ReturnModel;
