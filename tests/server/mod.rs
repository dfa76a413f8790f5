use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};

/// How the fixture server answers the robots.txt probe.
#[derive(Clone, Copy)]
#[allow(dead_code)]
pub enum RobotsBehavior {
    Ok,
    NotFound,
    Forbidden,
    ServerError,
}

impl RobotsBehavior {
    fn status(self) -> StatusCode {
        match self {
            RobotsBehavior::Ok => StatusCode::OK,
            RobotsBehavior::NotFound => StatusCode::NOT_FOUND,
            RobotsBehavior::Forbidden => StatusCode::FORBIDDEN,
            RobotsBehavior::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Starts a fixture server on an ephemeral port and returns its base URL.
pub async fn spawn_test_server(robots: RobotsBehavior) -> String {
    let status = robots.status();

    let http_server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(status))
            .route("/good", web::get().to(good_page))
            .route("/weak", web::get().to(weak_page))
            .route("/gaps", web::get().to(gappy_page))
            .route("/robots.txt", web::get().to(robots_txt))
            .route("/robots.txt", web::head().to(robots_txt))
    })
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = http_server
        .addrs()
        .first()
        .cloned()
        .expect("No address bound");
    let url = format!("http://{}", addr);

    let app_server = http_server.run();

    tokio::spawn(async move {
        if let Err(e) = app_server.await {
            eprintln!("Test server error: {}", e);
        }
    });

    url
}

async fn robots_txt(status: web::Data<StatusCode>) -> HttpResponse {
    if **status == StatusCode::OK {
        HttpResponse::Ok()
            .content_type("text/plain")
            .body("User-agent: *\nAllow: /\n")
    } else {
        HttpResponse::build(**status).finish()
    }
}

/// Title, meta description, 350+ words, all six heading levels, every image
/// carries an alt attribute (one intentionally empty).
async fn good_page() -> HttpResponse {
    let words = "lorem ipsum dolor sit amet ".repeat(70);
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>A well-optimized page</title>
<meta name="description" content="An example page used to exercise the analyzer.">
</head>
<body>
<h1>Main</h1><h2>Section</h2><h3>Sub</h3><h4>Detail</h4><h5>Minor</h5><h6>Fine</h6>
<img src="cat.png" alt="a cat">
<img src="spacer.png" alt="">
<p>{}</p>
</body>
</html>"#,
        words
    );
    HttpResponse::Ok().content_type("text/html").body(html)
}

/// No title, no meta description, thin content, two images without alt. All
/// six heading levels are present so the heading rules stay quiet.
async fn weak_page() -> HttpResponse {
    let html = r#"<!DOCTYPE html>
<html>
<head></head>
<body>
<h1>One</h1><h2>Two</h2><h3>Three</h3><h4>Four</h4><h5>Five</h5><h6>Six</h6>
<img src="a.png">
<img src="b.png">
<p>This page has very little text.</p>
</body>
</html>"#;
    HttpResponse::Ok().content_type("text/html").body(html)
}

/// Heading structure problems: an empty H2 and no H4-H6.
async fn gappy_page() -> HttpResponse {
    let html = r#"<!DOCTYPE html>
<html>
<head>
<title>Structured page</title>
<meta name="description" content="Heading structure fixture.">
</head>
<body>
<h1>Top</h1><h2>   </h2><h3>Sub</h3>
<p>Short text.</p>
</body>
</html>"#;
    HttpResponse::Ok().content_type("text/html").body(html)
}
