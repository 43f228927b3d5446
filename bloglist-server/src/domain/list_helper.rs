//! Aggregates over an in-memory list of posts.
//!
//! Ties are always resolved in favour of whatever was seen first: the first
//! post for [`favorite_post`], the first author group for the author
//! aggregates. Groups are keyed by the optional author, so posts without an
//! author are counted together under `None`.

use super::post::Post;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FavoritePost {
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) likes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthorPosts {
    pub(crate) author: Option<String>,
    pub(crate) blogs: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthorLikes {
    pub(crate) author: Option<String>,
    pub(crate) likes: i64,
}

pub(crate) fn total_likes(posts: &[Post]) -> i64 {
    posts
        .iter()
        .fold(0_i64, |total, post| total.saturating_add(post.likes))
}

/// `None` for an empty list.
pub(crate) fn favorite_post(posts: &[Post]) -> Option<FavoritePost> {
    let favorite = first_max_by_key(posts.iter(), |post| post.likes)?;
    Some(FavoritePost {
        title: favorite.title.clone(),
        author: favorite.author.clone(),
        likes: favorite.likes,
    })
}

pub(crate) fn most_prolific_author(posts: &[Post]) -> Option<AuthorPosts> {
    let groups = tally_by_author(posts, |_| 1);
    let (author, blogs) = first_max_by_key(groups.into_iter(), |(_, count)| *count)?;
    Some(AuthorPosts {
        author: author.map(str::to_string),
        blogs,
    })
}

pub(crate) fn most_liked_author(posts: &[Post]) -> Option<AuthorLikes> {
    let groups = tally_by_author(posts, |post| post.likes);
    let (author, likes) = first_max_by_key(groups.into_iter(), |(_, likes)| *likes)?;
    Some(AuthorLikes {
        author: author.map(str::to_string),
        likes,
    })
}

// Keeps groups in first-seen order; the author count is small enough for a linear scan.
fn tally_by_author(posts: &[Post], value: impl Fn(&Post) -> i64) -> Vec<(Option<&str>, i64)> {
    let mut groups: Vec<(Option<&str>, i64)> = Vec::new();
    for post in posts {
        let key = post.author.as_deref();
        match groups.iter_mut().find(|(author, _)| *author == key) {
            Some((_, total)) => *total = total.saturating_add(value(post)),
            None => groups.push((key, value(post))),
        }
    }
    groups
}

// `Iterator::max_by_key` keeps the last maximum, we need the first.
fn first_max_by_key<T>(items: impl Iterator<Item = T>, key: impl Fn(&T) -> i64) -> Option<T> {
    let mut best: Option<(i64, T)> = None;
    for item in items {
        let k = key(&item);
        let better = match &best {
            Some((best_key, _)) => k > *best_key,
            None => true,
        };
        if better {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}
