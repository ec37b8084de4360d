pub mod data_table;
pub mod export_bar;
pub mod options_panel;
