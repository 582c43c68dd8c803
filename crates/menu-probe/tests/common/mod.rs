#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MENU_PAGE: &str = r#"<!doctype html>
<html lang="tr">
<body>
<header class="site-header">
  <div class="container">
    <button type="button" aria-label="Menu" class="md:hidden">
      <svg class="lucide lucide-menu h-6 w-6" data-lucide="menu"></svg>
    </button>
    <a href="/" aria-label="Ana sayfaya git">Home</a>
    <button aria-label="Kullanıcı menüsü"></button>
  </div>
</header>
<main><header>article header</header></main>
</body>
</html>"#;

/// Start a server answering `GET /` with `template`.
pub async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

pub fn page_url(server: &MockServer) -> String {
    format!("{}/", server.uri())
}

/// A localhost URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}
