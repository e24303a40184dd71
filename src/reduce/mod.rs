pub mod allow_list;
pub mod reducer;
pub mod report;
