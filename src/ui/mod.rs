pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, info, section, success, summary_row, warn};
pub use table::{
    courses_table, failed_table, passed_table, semester_stats_table, situation_table,
    students_table, summary_table,
};
pub use theme::{Theme, theme};
