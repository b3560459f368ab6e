use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};

/// Post entity - the single record type the service manages.
///
/// `id` is assigned by the store at creation time and never reused. `due`
/// keeps the timezone offset it was supplied with, so date queries resolve
/// against the post's own timezone rather than the server's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author: String,
    pub text: String,
    pub tags: Vec<String>,
    pub due: DateTime<FixedOffset>,
}

/// Creation input - everything a `Post` has except the store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub author: String,
    pub text: String,
    pub tags: Vec<String>,
    pub due: DateTime<FixedOffset>,
}

impl Post {
    /// Materialize a post from creation input and a freshly assigned id.
    pub fn from_new(id: i64, new: NewPost) -> Self {
        Self {
            id,
            author: new.author,
            text: new.text,
            tags: new.tags,
            due: new.due,
        }
    }

    /// Whether the post carries `tag` at any position.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the due date falls on the given calendar day, evaluated in
    /// the post's own timezone. Time-of-day is ignored.
    pub fn due_on(&self, year: i32, month: u32, day: u32) -> bool {
        self.due.year() == year && self.due.month() == month && self.due.day() == day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(due: &str, tags: &[&str]) -> Post {
        Post {
            id: 0,
            author: "alice".to_string(),
            text: "hello".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            due: due.parse().unwrap(),
        }
    }

    #[test]
    fn test_has_tag_exact_match() {
        let p = post("2024-01-01T00:00:00Z", &["go", "rest"]);
        assert!(p.has_tag("rest"));
        assert!(!p.has_tag("re"));
        assert!(!p.has_tag("missing"));
    }

    #[test]
    fn test_due_on_ignores_time_of_day() {
        let p = post("2024-03-05T23:59:00Z", &[]);
        assert!(p.due_on(2024, 3, 5));
        assert!(!p.due_on(2024, 3, 6));
    }

    #[test]
    fn test_due_on_uses_post_timezone() {
        // 01:30 at +05:00 is March 6th locally but still March 5th in UTC;
        // the post's own offset wins.
        let p = post("2024-03-06T01:30:00+05:00", &[]);
        assert!(p.due_on(2024, 3, 6));
        assert!(!p.due_on(2024, 3, 5));
    }
}
