use portfolio_common::model::{
    Id,
    certification::Certification,
    post::{Category, Post},
};
use time::{Date, macros::date};

const THUMBNAIL_DIR: &str = "/static/assets/images/blog_thumbnails";

struct PostRow {
    id: u32,
    title: &'static str,
    description: &'static str,
    thumbnail: &'static str,
    date: Date,
    category: Category,
    content: &'static str,
}

struct CertificationRow {
    year: &'static str,
    title: &'static str,
    issuer: &'static str,
    description: &'static str,
}

const POSTS: [PostRow; 10] = [
    PostRow {
        id: 1,
        title: "Hướng dẫn Học Lập trình Java Cơ bản - Phần 1",
        description: "Tìm hiểu các khái niệm nền tảng của Java: biến, kiểu dữ liệu, và các toán tử cơ bản.",
        thumbnail: "java_basic_1",
        date: date!(2024 - 12 - 15),
        category: Category::Java,
        content: "Bài viết này sẽ giới thiệu...",
    },
    PostRow {
        id: 2,
        title: "JavaScript ES6+: Arrow Functions & Destructuring",
        description: "Khám phá những tính năng mạnh mẽ của JavaScript ES6+ để viết code sạch và hiệu quả hơn.",
        thumbnail: "js_es6",
        date: date!(2024 - 12 - 10),
        category: Category::JavaScript,
        content: "Arrow Functions làm giảm...",
    },
    PostRow {
        id: 3,
        title: "Java OOP: Kế Thừa và Đa Hình trong Thực Tiễn",
        description: "Hiểu rõ hơn về kế thừa, đa hình và cách áp dụng chúng vào các dự án thực tế.",
        thumbnail: "java_oop",
        date: date!(2024 - 12 - 05),
        category: Category::Java,
        content: "Kế thừa (Inheritance) là...",
    },
    PostRow {
        id: 4,
        title: "React Hooks: useState & useEffect Tập 1",
        description: "Nắm vững cách sử dụng Hooks trong React để quản lý state và side effects một cách hiệu quả.",
        thumbnail: "react_hooks",
        date: date!(2024 - 11 - 28),
        category: Category::JavaScript,
        content: "React Hooks đã thay đổi...",
    },
    PostRow {
        id: 5,
        title: "Java Collections Framework - ArrayList, HashMap",
        description: "Tìm hiểu về các cấu trúc dữ liệu quan trọng nhất trong Java Collections.",
        thumbnail: "java_collections",
        date: date!(2024 - 11 - 22),
        category: Category::Java,
        content: "Java Collections Framework...",
    },
    PostRow {
        id: 6,
        title: "Async/Await trong JavaScript: Làm chủ Bất Đồng Bộ",
        description: "Học cách sử dụng async/await để xử lý các tác vụ bất đồng bộ một cách sạch sẽ và dễ đọc.",
        thumbnail: "js_async",
        date: date!(2024 - 11 - 18),
        category: Category::JavaScript,
        content: "Async/await là cách...",
    },
    PostRow {
        id: 7,
        title: "Java Stream API: Xử Lý Dữ Liệu Hàm Số",
        description: "Khám phá sức mạnh của Stream API trong Java để viết code hàm số và xử lý tập hợp dữ liệu.",
        thumbnail: "java_stream",
        date: date!(2024 - 11 - 10),
        category: Category::Java,
        content: "Stream API là một...",
    },
    PostRow {
        id: 8,
        title: "DOM Manipulation với Vanilla JavaScript",
        description: "Làm chủ việc thao tác với DOM mà không cần framework, giúp code nhẹ và nhanh hơn.",
        thumbnail: "js_dom",
        date: date!(2024 - 11 - 05),
        category: Category::JavaScript,
        content: "DOM (Document Object Model)...",
    },
    PostRow {
        id: 9,
        title: "Thiết Kế Pattern: Singleton & Factory trong Java",
        description: "Hiểu rõ những Design Pattern phổ biến nhất giúp code dễ bảo trì và mở rộng hơn.",
        thumbnail: "java_patterns",
        date: date!(2024 - 10 - 28),
        category: Category::Java,
        content: "Design Pattern là...",
    },
    PostRow {
        id: 10,
        title: "CSS Grid vs Flexbox: Chọn Cái Nào Cho Bố Cục Web?",
        description: "So sánh chi tiết giữa Grid và Flexbox, khi nào dùng cái nào để tạo bố cục responsive tuyệt vời.",
        thumbnail: "css_layout",
        date: date!(2024 - 10 - 20),
        category: Category::Css,
        content: "Cả CSS Grid và...",
    },
];

const CERTIFICATIONS: [CertificationRow; 8] = [
    CertificationRow {
        year: "2024",
        title: "Networking Basics",
        issuer: "Cisco Networking Academy",
        description: "Foundational networking concepts, architecture, and protocols",
    },
    CertificationRow {
        year: "2024",
        title: "JavaScript Essentials 1",
        issuer: "Cisco Networking Academy",
        description: "Core JavaScript syntax, variables, and control structures",
    },
    CertificationRow {
        year: "2024",
        title: "JavaScript Essentials 2",
        issuer: "Cisco Networking Academy",
        description: "Advanced JavaScript, objects, functions, and DOM manipulation",
    },
    CertificationRow {
        year: "2024",
        title: "Complete Java Developer",
        issuer: "Udemy",
        description: "Hoàn thành khóa học lập trình Java toàn diện",
    },
    CertificationRow {
        year: "2024",
        title: "JavaScript Advanced",
        issuer: "Coursera",
        description: "Mastered ES6+, Async Programming, DOM APIs",
    },
    CertificationRow {
        year: "2023",
        title: "React & Redux",
        issuer: "Udemy",
        description: "Chuyên sâu về React Hooks và State Management",
    },
    CertificationRow {
        year: "2023",
        title: "Web Design Fundamentals",
        issuer: "Codecademy",
        description: "HTML5, CSS3, Responsive Design",
    },
    CertificationRow {
        year: "2023",
        title: "Python for Data Science",
        issuer: "DataCamp",
        description: "Numpy, Pandas, Matplotlib Basics",
    },
];

impl From<&PostRow> for Post {
    fn from(value: &PostRow) -> Self {
        Self {
            id: Id::new(value.id),
            title: value.title.to_owned(),
            description: value.description.to_owned(),
            image: format!("{THUMBNAIL_DIR}/{}.jpg", value.thumbnail),
            date: value.date,
            category: value.category,
            content: value.content.to_owned(),
        }
    }
}

impl From<&CertificationRow> for Certification {
    fn from(value: &CertificationRow) -> Self {
        Self {
            year: value.year.to_owned(),
            title: value.title.to_owned(),
            issuer: value.issuer.to_owned(),
            description: value.description.to_owned(),
        }
    }
}

pub(crate) fn posts() -> Vec<Post> {
    POSTS.iter().map(Post::from).collect()
}

pub(crate) fn certifications() -> Vec<Certification> {
    CERTIFICATIONS.iter().map(Certification::from).collect()
}
