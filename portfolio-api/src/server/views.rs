use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tera::{Context, Tera};
use thiserror::Error;
use tracing::error;

/// HTML views, compiled once from the templates embedded in the binary.
#[derive(Debug)]
pub struct Views {
    tera: Tera,
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Rendering template {0} failed: {1}")]
    Render(&'static str, tera::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self, "Replying with page error");

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            ("index.html", include_str!("../../templates/index.html")),
            ("blog.html", include_str!("../../templates/blog.html")),
            (
                "post-detail.html",
                include_str!("../../templates/post-detail.html"),
            ),
            ("about.html", include_str!("../../templates/about.html")),
            ("contact.html", include_str!("../../templates/contact.html")),
            ("404.html", include_str!("../../templates/404.html")),
        ])?;

        Ok(Self { tera })
    }

    pub fn render(
        &self,
        template: &'static str,
        context: &Context,
    ) -> Result<Html<String>, PageError> {
        self.tera
            .render(template, context)
            .map(Html)
            .map_err(|err| PageError::Render(template, err))
    }

    pub fn not_found(&self) -> Response {
        match self.render("404.html", &Context::new()) {
            Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
            Err(err) => err.into_response(),
        }
    }
}
