//! # Postiz Client
//!
//! Client for the Postiz public API (`/api/public/v1`): connection config,
//! the HTTP gateway, wire types, and per-platform post settings.

pub mod client;
pub mod config;
pub mod error;
pub mod settings;
pub mod types;

pub use client::{PostizClient, SchedulingApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use settings::{InstagramPostType, PlatformSettings, SettingsOptions};
pub use types::{
    CreatePostRequest, DateRange, Integration, IntegrationRef, MediaReference, Post, PostEntry,
    PostValue, PostsResponse,
};
