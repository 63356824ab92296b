pub mod bar;
pub mod line;
pub mod pie;
pub mod progress;
pub mod tooltip;

pub use bar::BarChart;
pub use line::LineChart;
pub use pie::PieChart;
pub use progress::ProgressList;
