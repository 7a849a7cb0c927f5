//! Typed async client for the Atlassian Confluence and Jira REST APIs.
//!
//! Every service method issues exactly one HTTP request and returns the
//! decoded body together with a [`ResponseScheme`] describing the round trip.

pub mod client;
pub mod confluence;
pub mod error;
pub mod jira;
pub mod models;

pub use client::{Auth, ClientConfig, RestClient};
pub use confluence::{ConfluenceClient, ContentLabelService, ContentService, SpaceService};
pub use error::{Error, Result};
pub use jira::{ApiVersion, JiraClient, WorkflowService};
pub use models::*;
