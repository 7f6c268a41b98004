// src/lib.rs

//! cardata: vehicle catalog scraper library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod site;
pub mod storage;
pub mod utils;
