//! Article Endpoints

use serde::Serialize;

use super::{delete, get_list, post_json, put_json, Transport};
use crate::drafts::EditedArticle;
use crate::error::ApiResult;
use crate::models::Article;

#[derive(Debug, Serialize)]
struct ArticleRequest<'a> {
    title: &'a str,
    content: &'a str,
    published: bool,
    tags: &'a str,
}

impl<'a> From<&'a EditedArticle> for ArticleRequest<'a> {
    fn from(draft: &'a EditedArticle) -> Self {
        Self {
            title: &draft.title,
            content: &draft.content,
            published: draft.published,
            tags: &draft.tags,
        }
    }
}

pub async fn list_articles(transport: &dyn Transport) -> ApiResult<Vec<Article>> {
    get_list(transport, "/articles").await
}

pub async fn create_article(transport: &dyn Transport, draft: &EditedArticle) -> ApiResult<Article> {
    post_json(transport, "/articles", &ArticleRequest::from(draft)).await
}

pub async fn update_article(transport: &dyn Transport, draft: &EditedArticle) -> ApiResult<Article> {
    put_json(transport, &format!("/articles/{}", draft.id), &ArticleRequest::from(draft)).await
}

pub async fn delete_article(transport: &dyn Transport, id: u32) -> ApiResult<()> {
    delete(transport, &format!("/articles/{}", id)).await
}
