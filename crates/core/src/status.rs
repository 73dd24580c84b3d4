//! Default status values written when a client omits `status`.

/// Default status for a newly created event.
pub const EVENT_UPCOMING: &str = "upcoming";

/// Status for an event that has already taken place.
pub const EVENT_COMPLETED: &str = "completed";

/// Default status for a newly created news article.
pub const NEWS_DRAFT: &str = "draft";

/// Status for a news article visible on the public site.
pub const NEWS_PUBLISHED: &str = "published";

/// Default status for an incoming contact message.
pub const CONTACT_UNREAD: &str = "unread";
