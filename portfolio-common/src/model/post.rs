use crate::model::Id;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Deserialize, Serialize)]
pub enum Category {
    Java,
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Java => "Java",
            Category::JavaScript => "JavaScript",
            Category::Css => "CSS",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blog article. The catalog order is the display order.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub title: String,
    pub description: String,
    /// Site-absolute path of the thumbnail, e.g. `/static/assets/images/blog_thumbnails/js_dom.jpg`.
    pub image: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub category: Category,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use crate::model::post::{Category, Post};
    use serde_json::json;
    use time::macros::date;

    #[test]
    fn post_wire_format() {
        let post = Post {
            id: 10.into(),
            title: "CSS Grid vs Flexbox".to_owned(),
            description: "So sánh".to_owned(),
            image: "/static/assets/images/blog_thumbnails/css_layout.jpg".to_owned(),
            date: date!(2024 - 10 - 20),
            category: Category::Css,
            content: "Cả CSS Grid và...".to_owned(),
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 10,
                "title": "CSS Grid vs Flexbox",
                "description": "So sánh",
                "image": "/static/assets/images/blog_thumbnails/css_layout.jpg",
                "date": "2024-10-20",
                "category": "CSS",
                "content": "Cả CSS Grid và...",
            })
        );

        let parsed: Post = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, post);
    }

    #[test]
    fn category_names() {
        assert_eq!(Category::JavaScript.to_string(), "JavaScript");
        assert_eq!(
            serde_json::from_str::<Category>("\"CSS\"").unwrap(),
            Category::Css
        );
        assert!(serde_json::from_str::<Category>("\"Css\"").is_err());
    }
}
