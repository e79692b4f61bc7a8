pub mod adapter;
pub mod api;
pub mod components;
pub mod error;
pub mod flow;
pub mod sequence;
pub mod tabs;
pub mod view;
