pub mod distribution;
pub mod drag;
pub mod export;
pub mod loader;
pub mod scale;
pub mod threshold;
pub mod ticks;

pub use dist_lens_common::{DistLensError, Result};
pub use distribution::{build_distribution, Distribution, DistributionPoint};
pub use drag::{DragController, PlotArea, ThresholdState};
pub use export::{export_csv, export_json, print_summary};
pub use loader::{load_values, resolve_paths, LoadReport};
pub use scale::{percentage_to_threshold, threshold_to_percentage};
pub use threshold::{count_matching, lower_bound, upper_bound, FilterMode};
pub use ticks::compute_ticks;
