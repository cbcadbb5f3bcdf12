#![doc = "The `taskhub` library crate."]
#![doc = ""]
#![doc = "Per-user task management behind a small REST API: users register by"]
#![doc = "email, log in to receive a bearer token, and manage their tasks."]
#![doc = "The crate is layered as entities (`models`), repository contracts"]
#![doc = "and implementations (`repository`), application services"]
#![doc = "(`services`), and the HTTP surface (`routes`, `auth`); the binary"]
#![doc = "in `main.rs` wires the layers together."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod validation;

pub use crate::error::AppError;
