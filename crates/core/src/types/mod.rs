//! Core types for POSystem.
//!
//! Records mirror the backend's JSON (camelCase on the wire).

pub mod blog;
pub mod contact;
pub mod email;
pub mod id;
pub mod profile;
pub mod stats;
pub mod subscriber;
pub mod tags;
pub mod timestamp;

pub use blog::{
    Author, BlogPost, CATEGORIES, CreatePostPayload, DEFAULT_CATEGORY, Seo, SeoPayload,
    TwitterCardType, UpdatePostPayload,
};
pub use contact::{ContactMessage, ContactSubmission};
pub use email::{Email, EmailError};
pub use id::*;
pub use profile::{AuthToken, LoginRequest, Profile, RegisterRequest};
pub use stats::DashboardStats;
pub use subscriber::Subscriber;
pub use tags::{Tags, join_tags, split_tags};
pub use timestamp::{format_iso_millis, parse_timestamp};
