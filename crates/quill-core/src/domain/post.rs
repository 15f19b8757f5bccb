use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reply entity - embedded in a [`Comment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: Uuid,
    pub text: String,
    pub author: Uuid,
}

impl Reply {
    pub fn new(text: String, author: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            author,
        }
    }
}

/// Comment entity - embedded in a [`Post`], owning its replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub author: Uuid,
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn new(text: String, author: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            author,
            replies: Vec::new(),
        }
    }

    /// Append a reply; insertion order is display order.
    pub fn add_reply(&mut self, reply: Reply) {
        self.replies.push(reply);
    }

    pub fn reply(&self, reply_id: Uuid) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == reply_id)
    }

    /// Remove a reply by id, returning it if present.
    pub fn remove_reply(&mut self, reply_id: Uuid) -> Option<Reply> {
        let index = self.replies.iter().position(|r| r.id == reply_id)?;
        Some(self.replies.remove(index))
    }
}

/// Post entity - a blog post owning its comments and like set.
///
/// `author_id` is set once at creation and never reassigned. `likes` has
/// set semantics: membership of a user id means that user liked the post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub likes: Vec<Uuid>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with generated ID and timestamps.
    pub fn new(author_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            content,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial edit - only provided fields are replaced.
    pub fn apply_update(&mut self, title: Option<String>, content: Option<String>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }

    /// Append a comment; insertion order is display order.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
        self.updated_at = Utc::now();
    }

    pub fn comment(&self, comment_id: Uuid) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    pub fn comment_mut(&mut self, comment_id: Uuid) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == comment_id)
    }

    /// Remove a comment by id, discarding all of its replies.
    pub fn remove_comment(&mut self, comment_id: Uuid) -> Option<Comment> {
        let index = self.comments.iter().position(|c| c.id == comment_id)?;
        let removed = self.comments.remove(index);
        self.updated_at = Utc::now();
        Some(removed)
    }

    /// Toggle a user's like. Returns `true` when the post is liked after
    /// the toggle, `false` when the like was removed.
    pub fn toggle_like(&mut self, user_id: Uuid) -> bool {
        match self.likes.iter().position(|id| *id == user_id) {
            Some(index) => {
                self.likes.remove(index);
                false
            }
            None => {
                self.likes.push(user_id);
                true
            }
        }
    }

    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_update_keeps_absent_fields() {
        let mut post = Post::new(Uuid::new_v4(), "Title".into(), "Content".into());
        post.apply_update(Some("New title".into()), None);

        assert_eq!(post.title, "New title");
        assert_eq!(post.content, "Content");
    }

    #[test]
    fn toggle_like_twice_restores_membership() {
        let mut post = Post::new(Uuid::new_v4(), "T".into(), "C".into());
        let user = Uuid::new_v4();

        assert!(post.toggle_like(user));
        assert!(post.is_liked_by(user));
        assert_eq!(post.likes.len(), 1);

        assert!(!post.toggle_like(user));
        assert!(!post.is_liked_by(user));
        assert!(post.likes.is_empty());
    }

    #[test]
    fn remove_comment_discards_replies() {
        let mut post = Post::new(Uuid::new_v4(), "T".into(), "C".into());
        let mut comment = Comment::new("first".into(), Uuid::new_v4());
        comment.add_reply(Reply::new("re".into(), Uuid::new_v4()));
        let comment_id = comment.id;
        post.add_comment(comment);

        let removed = post.remove_comment(comment_id).unwrap();
        assert_eq!(removed.replies.len(), 1);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn remove_reply_by_id() {
        let mut comment = Comment::new("c".into(), Uuid::new_v4());
        let reply = Reply::new("r1".into(), Uuid::new_v4());
        let reply_id = reply.id;
        comment.add_reply(reply);
        comment.add_reply(Reply::new("r2".into(), Uuid::new_v4()));

        assert!(comment.remove_reply(reply_id).is_some());
        assert_eq!(comment.replies.len(), 1);
        assert!(comment.remove_reply(reply_id).is_none());
    }
}
