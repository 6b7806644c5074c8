//! Post filter and highlight engine
//!
//! Provides the search pipeline run over the post collection:
//! 1. Normalize the raw query ([`query`])
//! 2. Decide per post whether it matches ([`matcher`])
//! 3. Recompute visibility for every post ([`filter`])
//! 4. Mark matches in titles and excerpts ([`highlight`])
//! 5. Surface a notice when nothing matched ([`notice`])
//!
//! [`session::SearchSession`] ties these together with debouncing and tag
//! selection, and exposes the result as a [`view::PageView`].

pub mod error;
pub mod filter;
pub mod highlight;
pub mod matcher;
pub mod notice;
pub mod query;
pub mod session;
pub mod view;

pub use error::SearchError;
pub use filter::{FilterOutcome, PostFilterExt, filter_pass};
pub use highlight::{Highlighted, Segment, highlight};
pub use matcher::{matches, matches_filter, searchable_text};
pub use notice::NoResultsNotice;
pub use query::{ActiveFilter, Query};
pub use session::{SearchSession, SessionSettings, SessionState};
pub use view::{PageView, PostView};
