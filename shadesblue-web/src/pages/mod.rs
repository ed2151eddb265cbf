pub mod accordion_lab;
pub mod contact;
pub mod data_table;
pub mod home;
pub mod nav_demo;
pub mod not_found;
pub mod portfolio;
pub mod project;
pub mod what_i_do;
