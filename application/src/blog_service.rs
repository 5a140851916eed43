use domain::gateway::BlogGateway;
use domain::models::{BlogDraft, BlogPost};
use shared::types::Result;

const FETCH_FALLBACK: &str = "Failed to fetch blog posts";
const CREATE_FALLBACK: &str = "Failed to publish blog post";
const UPDATE_FALLBACK: &str = "Failed to update blog post";
const DELETE_FALLBACK: &str = "Failed to delete blog post";

/// In-memory mirror of the blog collection.
pub struct BlogService<G> {
    gateway: G,
    posts: Vec<BlogPost>,
    is_loading: bool,
    last_error: Option<String>,
}

impl<G: BlogGateway> BlogService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            posts: Vec::new(),
            is_loading: false,
            last_error: None,
        }
    }

    pub async fn fetch_all(&mut self) -> Result<&[BlogPost]> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.list_posts().await;
        self.is_loading = false;
        match result {
            Ok(posts) => {
                self.posts = posts;
                Ok(&self.posts)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(FETCH_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn fetch_by_id(&mut self, id: &str) -> Result<BlogPost> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.fetch_post(id).await;
        self.is_loading = false;
        match result {
            Ok(post) => Ok(post),
            Err(err) => {
                self.last_error = Some(err.human_message(FETCH_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn publish(&mut self, draft: &BlogDraft) -> Result<BlogPost> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.create_post(draft).await;
        self.is_loading = false;
        match result {
            Ok(post) => {
                self.posts.insert(0, post.clone());
                Ok(post)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(CREATE_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn update(&mut self, id: &str, draft: &BlogDraft) -> Result<BlogPost> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.update_post(id, draft).await;
        self.is_loading = false;
        match result {
            Ok(updated) => {
                if let Some(slot) = self.posts.iter_mut().find(|post| post.id == id) {
                    *slot = updated.clone();
                }
                Ok(updated)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(UPDATE_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str) -> Result<()> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.delete_post(id).await;
        self.is_loading = false;
        match result {
            Ok(()) => {
                self.posts.retain(|post| post.id != id);
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.human_message(DELETE_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn find_by_id(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&BlogPost> {
        self.posts
            .iter()
            .find(|post| post.title.eq_ignore_ascii_case(title))
    }

    pub fn by_category(&self, category: &str) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|post| {
                post.category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category))
            })
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for post in &self.posts {
            if let Some(category) = &post.category {
                if !categories.iter().any(|seen| seen == category) {
                    categories.push(category.clone());
                }
            }
        }
        categories
    }

    pub fn count(&self) -> usize {
        self.posts.len()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
