pub mod db;
pub mod error_convert;
pub mod health;
pub mod mock;
pub mod openapi;
pub mod repo;
pub mod rest;
