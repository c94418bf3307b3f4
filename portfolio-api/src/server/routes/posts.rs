use crate::server::{Result, ServerError, ServerRouter, json::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use portfolio_catalog::client::Catalog;
use portfolio_common::model::{
    Id, deserialize_path_id,
    post::{Post, PostMarker},
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_get(get_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/blog/{id}", rejection(ServerError))]
struct GetPostPath {
    #[serde(deserialize_with = "deserialize_path_id")]
    id: Id<PostMarker>,
}

async fn get_post(
    GetPostPath { id }: GetPostPath,
    State(catalog): State<Arc<Catalog>>,
) -> Result<Json<Post>> {
    let post = catalog
        .fetch_post(id)
        .ok_or(ServerError::PostByIdNotFound(id))?;

    Ok(Json(post.clone()))
}

#[cfg(test)]
mod tests {
    use crate::server::tests::{body_json, get};
    use axum::http::{StatusCode, header::CONTENT_TYPE};
    use serde_json::json;

    #[tokio::test]
    async fn known_post() {
        let response = get("/api/blog/1").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            body_json(response).await,
            json!({
                "id": 1,
                "title": "Hướng dẫn Học Lập trình Java Cơ bản - Phần 1",
                "description": "Tìm hiểu các khái niệm nền tảng của Java: biến, kiểu dữ liệu, và các toán tử cơ bản.",
                "image": "/static/assets/images/blog_thumbnails/java_basic_1.jpg",
                "date": "2024-12-15",
                "category": "Java",
                "content": "Bài viết này sẽ giới thiệu...",
            })
        );
    }

    #[tokio::test]
    async fn unknown_post() {
        let response = get("/api/blog/9999").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "Post not found" }));
    }

    #[tokio::test]
    async fn non_canonical_ids() {
        for uri in ["/api/blog/latest", "/api/blog/+1", "/api/blog/-1", "/api/blog/1.0"] {
            let response = get(uri).await;

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body_json(response).await, json!({ "error": "Not found" }));
        }
    }
}
