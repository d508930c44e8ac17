//! Food Information API Library
//!
//! A thin proxy in front of USDA FoodData Central: it forwards search and
//! lookup requests and reshapes the responses into a simplified schema for
//! the Food Information App.
//!
//! # Modules
//!
//! - `app`: Router construction and middleware.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Request and response models.
//! - `openapi`: OpenAPI document.
//! - `shaping`: Mapping from USDA JSON to response models.
//! - `usda_client`: USDA FoodData Central client.

pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod shaping;
pub mod usda_client;
