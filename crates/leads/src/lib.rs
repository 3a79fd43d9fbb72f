//! Lead-capture module.
//!
//! Form types and required-field validation for the contact and newsletter
//! widgets, the chat upstream client, and the analytics sink the widgets
//! report interactions to. Submissions are independent fire-and-await
//! operations: no retry, no queueing, failures surface as inline messages
//! near the point of interaction.

pub mod analytics;
pub mod chat;
pub mod error;
pub mod forms;

pub use analytics::{AnalyticsEvent, AnalyticsSink, NoopSink, TracingSink};
pub use chat::{fallback_reply, ChatClient, ChatMessage, ChatReply, ChatRequest, Sender};
pub use error::{FormError, LeadsError};
pub use forms::{ContactForm, LeadRef, NewsletterSignup};
