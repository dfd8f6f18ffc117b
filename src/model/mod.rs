pub mod ids;
pub mod table;

pub use ids::{Dataset, Model, TaskKind};
pub use table::{LAYER_COLUMN, MetricsTable, ScoreRow};
