pub mod coordinate_mapper;
pub mod layout;
pub mod primitives;
pub mod snap;
pub mod task_store;
pub mod ticks;
pub mod time_anchor;
pub mod types;
pub mod view;

pub use coordinate_mapper::{BarGeometry, CoordinateMapper, project_bars};
pub use layout::{LayoutEngine, LayoutState, LayoutTuning, compute_layout};
pub use snap::snap_to_minutes;
pub use task_store::TaskStore;
pub use ticks::{Tick, TickAlign, TickKind, ticks};
pub use time_anchor::{TimeAnchor, TimeUnit, anchor};
pub use types::{Resource, Task, Viewport};
pub use view::{HourPreset, MonthPreset, ViewConfig, ViewPreset, ViewType, WeekPreset};
