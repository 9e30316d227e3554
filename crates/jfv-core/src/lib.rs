//! jfv-core - Jira field catalog.
//!
//! Lists every field of a Jira instance, tags team-managed fields with the
//! name of their owning project, and derives the viewer's table rows.
//!
//! # Pipeline
//!
//! ```text
//! JiraSource --list_fields/list_projects--> enrich --> EnrichedField[]
//!                                                        |
//!                              filter text --> derive_views --> FieldViews
//! ```
//!
//! # Example
//!
//! ```rust
//! use jfv_core::jira::{Field, Project, StaticJiraSource};
//! use jfv_core::resolver::get_all_fields;
//! use jfv_core::view::derive_views;
//!
//! let source = StaticJiraSource::new(
//!     vec![
//!         Field::new("f1", "Summary").with_project("10001"),
//!         Field::new("f2", "Description"),
//!     ],
//!     vec![Project::new("10001", "Alpha")],
//! );
//!
//! let enriched = get_all_fields(&source).unwrap();
//! assert_eq!(enriched[0].project_name.as_deref(), Some("Alpha"));
//! assert_eq!(enriched[1].project_name, None);
//!
//! let views = derive_views(&enriched, "");
//! assert_eq!(views.rows[0].name, "Description");
//! assert!(views.duplicate_rows.is_empty());
//! ```

pub mod collation;
pub mod config;
pub mod enrich;
pub mod jira;
pub mod page;
pub mod resolver;
pub mod view;

pub use config::{ConfigError, JfvConfig};
pub use enrich::{EnrichedField, enrich};
pub use jira::{JiraError, JiraSource};
pub use page::{FieldsPage, LoadState};
pub use resolver::{GET_ALL_FIELDS, Resolver, ResolverError, get_all_fields};
pub use view::{DisplayRow, FieldViews, derive_views};
