//! Data models for schedule planning.
//!
//! This module contains the domain types shared by the conflict engine, the
//! catalog and the current-term client. Display implementations live in
//! [`crate::display::models`] so that data and presentation stay apart.
//!
//! # Overview
//!
//! - [`Meeting`]: a day plus a half-open `[start, end)` interval of
//!   [`ClockTime`]s; construction enforces `start < end`
//! - [`PlannedCourse`]: an entry on the schedule, either speculative or
//!   sourced from the enrolled term; its conflict flag is owned by the engine
//! - [`CourseOffering`] / [`CourseGroup`]: what can be added
//! - [`ScheduleTemplate`]: a ready-made set of placements
//! - [`CurrentTermEntry`]: the API's enrolled-term payload
//! - [`Outcome`]: how a mutation went
//!
//! # Examples
//!
//! ```rust
//! use timetable_core::models::Meeting;
//!
//! let ai = Meeting::parse("Lunes", "09:30", "09:50").unwrap();
//! let networks = Meeting::parse("Monday", "09:40", "10:30").unwrap();
//! assert!(ai.overlaps(&networks));
//! println!("{}", ai); // Monday 09:30-09:50
//! ```

pub mod current;
pub mod day;
pub mod meeting;
pub mod offering;
pub mod outcome;
pub mod planned;
pub mod time;

pub use current::{flatten_current_term, CurrentTermEntry};
pub use day::Day;
pub use meeting::Meeting;
pub use offering::{CourseGroup, CourseOffering, ScheduleTemplate, TemplateCourse, DEFAULT_CREDITS};
pub use outcome::{NoOp, Outcome};
pub use planned::{EntryId, PlannedCourse};
pub use time::ClockTime;
