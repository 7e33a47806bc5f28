//! MeloMix player core: sample catalog, online search, persisted library and
//! playlists, and a playback session driving a pluggable audio backend.

pub mod api;
pub mod app;
pub mod constants;
pub mod data;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
