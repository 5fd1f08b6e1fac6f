//! Lookup by user name
//!
//! Names are not unique. The first (oldest) post wins, so later posts by the
//! same user are never reachable through lookup.

use crate::error::Result;
use crate::post::Post;
use crate::store::PostStore;

/// First post whose `user_name` matches exactly (case-sensitive)
pub fn first_by_user_name<'a>(posts: &'a [Post], name: &str) -> Option<&'a Post> {
    posts.iter().find(|post| post.user_name == name)
}

/// Scan the store for the first post by `name`
pub async fn find_by_user_name<S>(store: &S, name: &str) -> Result<Option<Post>>
where
    S: PostStore + ?Sized,
{
    let posts = store.read_all().await?;
    Ok(first_by_user_name(&posts, name).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryPostStore;

    #[tokio::test]
    async fn test_first_match_wins() {
        let store = MemoryPostStore::new();
        store.append(&Post::new("alice", "first")).await.unwrap();
        store.append(&Post::new("bob", "other")).await.unwrap();
        store.append(&Post::new("alice", "second")).await.unwrap();

        let post = find_by_user_name(&store, "alice").await.unwrap().unwrap();
        assert_eq!(post.content, "first");
    }

    #[tokio::test]
    async fn test_match_is_exact() {
        let store = MemoryPostStore::from_raw("Alice|upper\n");

        assert!(find_by_user_name(&store, "alice").await.unwrap().is_none());
        assert!(find_by_user_name(&store, "Alic").await.unwrap().is_none());
        assert!(find_by_user_name(&store, "Alice").await.unwrap().is_some());
    }

    #[test]
    fn test_empty_slice() {
        assert!(first_by_user_name(&[], "anyone").is_none());
    }
}
