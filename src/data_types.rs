// Data structures shared by the chart and the cursor

pub mod axis;
pub mod series;
pub mod tooltip;

pub use axis::{AxisKind, AxisRange};
pub use series::{Series, TimeSample};
pub use tooltip::{ArrowPlacement, ArrowSide, NearestPoint, TooltipLine, TooltipState};
