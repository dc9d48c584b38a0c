//! Core pipeline for a datacenter site comparison globe: orbital element
//! ingestion and derived physical metrics, satellite classification,
//! multi-resolution spatial clustering of geographic overlays, and
//! camera-driven viewport culling. The 3D rendering layer itself lives
//! elsewhere and only consumes the flat records produced here.

pub mod classify;
pub mod cluster;
pub mod config;
pub mod dataset;
pub mod elements;
pub mod feed;
pub mod metrics;
pub mod render;
pub mod viewport;
