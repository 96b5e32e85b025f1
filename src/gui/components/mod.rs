// src/gui/components/mod.rs
pub mod tabs;
pub mod controls;
pub mod data_table;
