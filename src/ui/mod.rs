pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{banner, header, section, step, success, summary_row, warn};
pub use table::{TableBuilder, careers_table, stats_table};
pub use theme::{theme, Theme};
