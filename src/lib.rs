//! This crate provides a way to display a conference programme and register to its events.
//!
//! A programme document is loaded once from a [`source`] (a local file or a web server), into a [`Programme`](programme::Programme) view model
//! that groups sessions by day and tells break entries apart (see [`is_break_entry`]).
//!
//! Visitors pick a school and some events (see the [`selection`] module), then submit a registration (see the [`registration`] module).
//! Registering is purely local: it only produces a confirmation message, that hides itself after a few seconds.
//!
//! All of this is owned by a [`Page`], and turned into HTML by the [`render`] module.

pub mod traits;

mod entry;
pub use entry::{is_break_entry, ProgrammeEntry, ProgrammeId};
pub mod day;
pub use day::{day_label, DayLabel};
pub mod programme;
pub use programme::Programme;

pub mod error;
pub mod source;
pub mod loader;

pub mod form;
pub mod selection;
pub mod registration;
pub mod page;
pub use page::Page;

pub mod render;
pub mod settings;
pub mod utils;
