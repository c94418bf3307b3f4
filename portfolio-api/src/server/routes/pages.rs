use crate::server::{
    ServerError, ServerRouter,
    views::{PageError, Views},
};
use axum::{
    extract::{State, rejection::PathRejection},
    response::{Html, IntoResponse, Response},
};
use axum_extra::routing::{RouterExt, TypedPath};
use portfolio_catalog::client::Catalog;
use portfolio_common::model::{Id, deserialize_path_id, post::PostMarker};
use serde::Deserialize;
use std::sync::Arc;
use tera::Context;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(home)
        .typed_get(blog)
        .typed_get(post_detail)
        .typed_get(about)
        .typed_get(contact)
}

pub async fn not_found(State(views): State<Arc<Views>>) -> Response {
    views.not_found()
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/", rejection(ServerError))]
struct HomePath();

async fn home(
    HomePath(): HomePath,
    State(views): State<Arc<Views>>,
) -> Result<Html<String>, PageError> {
    views.render("index.html", &Context::new())
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/blog", rejection(ServerError))]
struct BlogPath();

async fn blog(
    BlogPath(): BlogPath,
    State(catalog): State<Arc<Catalog>>,
    State(views): State<Arc<Views>>,
) -> Result<Html<String>, PageError> {
    let mut context = Context::new();
    context.insert("posts", catalog.posts());

    views.render("blog.html", &context)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/blog/{id}")]
struct PostDetailPath {
    #[serde(deserialize_with = "deserialize_path_id")]
    id: Id<PostMarker>,
}

async fn post_detail(
    path: Result<PostDetailPath, PathRejection>,
    State(catalog): State<Arc<Catalog>>,
    State(views): State<Arc<Views>>,
) -> Response {
    let Some(post) = path.ok().and_then(|path| catalog.fetch_post(path.id)) else {
        return views.not_found();
    };

    let mut context = Context::new();
    context.insert("post", post);
    context.insert("related_posts", &catalog.related_posts(post));

    views.render("post-detail.html", &context).into_response()
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/about", rejection(ServerError))]
struct AboutPath();

async fn about(
    AboutPath(): AboutPath,
    State(catalog): State<Arc<Catalog>>,
    State(views): State<Arc<Views>>,
) -> Result<Html<String>, PageError> {
    let mut context = Context::new();
    context.insert("certifications", catalog.certifications());

    views.render("about.html", &context)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/contact", rejection(ServerError))]
struct ContactPath();

async fn contact(
    ContactPath(): ContactPath,
    State(views): State<Arc<Views>>,
) -> Result<Html<String>, PageError> {
    views.render("contact.html", &Context::new())
}

#[cfg(test)]
mod tests {
    use crate::server::tests::{body_string, get};
    use axum::http::StatusCode;
    use portfolio_catalog::client::Catalog;

    fn positions(html: &str, needles: &[String]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| html.find(needle.as_str()).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn static_pages() {
        for uri in ["/", "/contact"] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(body_string(response).await.contains("</html>"));
        }
    }

    #[tokio::test]
    async fn blog_lists_every_post_in_order() {
        let response = get("/blog").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;

        let catalog = Catalog::builtin();
        assert_eq!(
            html.matches("<article class=\"blog-card\"").count(),
            catalog.posts().len()
        );

        let markers: Vec<_> = catalog
            .posts()
            .iter()
            .map(|post| format!("data-post-id=\"{}\"", post.id))
            .collect();
        let found = positions(&html, &markers);
        assert!(found.is_sorted());
    }

    #[tokio::test]
    async fn post_detail_with_related_posts() {
        let response = get("/blog/1").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;

        assert!(html.contains("Hướng dẫn Học Lập trình Java Cơ bản - Phần 1"));
        assert_eq!(html.matches("class=\"blog-card related\"").count(), 3);
        for related in ["/blog/3\"", "/blog/5\"", "/blog/7\""] {
            assert!(html.contains(related), "{related}");
        }
        assert!(!html.contains("/blog/9\""));
    }

    #[tokio::test]
    async fn post_detail_without_related_posts() {
        let html = body_string(get("/blog/10").await).await;

        assert!(!html.contains("Bài viết liên quan"));
    }

    #[tokio::test]
    async fn unknown_posts_render_not_found() {
        for uri in [
            "/blog/9999",
            "/blog/0",
            "/blog/-1",
            "/blog/+1",
            "/blog/01x",
            "/blog/abc",
        ] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            assert!(body_string(response).await.contains("404"));
        }
    }

    #[tokio::test]
    async fn about_lists_certifications() {
        let response = get("/about").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;

        let catalog = Catalog::builtin();
        assert_eq!(
            html.matches("class=\"certification\"").count(),
            catalog.certifications().len()
        );
        assert!(html.contains("Python for Data Science"));
    }

    #[tokio::test]
    async fn unknown_pages_render_not_found() {
        let response = get("/nowhere").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Trang bạn tìm kiếm không tồn tại."));
    }
}
