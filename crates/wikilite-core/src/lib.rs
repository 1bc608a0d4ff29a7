pub mod catalog;
pub mod error;
pub mod mcp_api;
pub mod model;
pub mod sample;
pub mod view_model;
pub mod view_state;
