//! Small reusable widgets shared by the screens.

pub mod level_gauge;
pub mod series_chart;
pub mod value_fmt;
