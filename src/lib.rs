//! Attendance and leave management: session handling, the role policy and
//! the lifecycle of leave requests and absence justifications, served over
//! actix-web.

pub mod api;
pub mod auth;
pub mod config;
pub mod docs;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;
