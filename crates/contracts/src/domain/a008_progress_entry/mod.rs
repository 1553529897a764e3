pub mod aggregate;

pub use aggregate::{ProgressEntry, ProgressEntryInput};
