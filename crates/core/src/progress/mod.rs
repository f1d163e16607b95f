//! Progress module - pure derived-view computations over goals.

mod calculator;

pub use calculator::{
    aggregate_progress, completion_ratio, donut_segments, monthly_breakdown, percent_complete,
    remaining, year_breakdown, MonthlyProgress,
};
