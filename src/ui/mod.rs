pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{header, section, success, summary_row};
pub use table::{proverbs_table, stats_table, stories_table, TableBuilder};
pub use theme::{theme, Theme};
