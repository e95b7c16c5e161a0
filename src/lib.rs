//! Interactive three-view block editor over a voxel workspace.
#![forbid(unsafe_code)]

pub mod app;
pub mod commands;
pub mod config;
pub mod event;
pub mod render;
pub mod workspace;
