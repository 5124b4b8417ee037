
use std::{net::TcpListener, time::Duration};

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_contact_api::{
    client::{ContactClient, SubmitError},
    routes::configure_routes,
    AppState,
};
use url::Url;

use test_utils::{failing_state, log_only_state, valid_form};

/// Binds the app to an ephemeral port and returns its base address.
async fn spawn_app(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let state = web::Data::new(state);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(NormalizePath::trim())
            .configure(configure_routes)
    })
    .listen(listener)
    .expect("Failed to bind server")
    .workers(1)
    .run();

    actix_rt::spawn(server);

    while reqwest::get(format!("{}/health", address)).await.is_err() {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    address
}

fn contact_client(address: &str) -> ContactClient {
    ContactClient::new(Url::parse(&format!("{}/api/contact", address)).unwrap())
}

#[actix_web::test]
async fn submit_roundtrip_succeeds() {
    let address = spawn_app(log_only_state()).await;
    let client = contact_client(&address);

    let response = client.submit(&valid_form()).await.unwrap();

    assert!(response.success);
    assert_eq!(response.message, "Mensagem enviada com sucesso!");
}

#[actix_web::test]
async fn server_dispatch_failure_surfaces_its_message() {
    let address = spawn_app(failing_state()).await;
    let client = contact_client(&address);

    let err = client.submit(&valid_form()).await.unwrap_err();

    let SubmitError::Api { status, message } = err else {
        panic!("expected an API error");
    };
    assert_eq!(status, 500);
    assert_eq!(message, "Failed to send email. Please try again later.");
}

#[actix_web::test]
async fn rate_limit_rejection_surfaces_its_message() {
    let address = spawn_app(log_only_state()).await;
    let client = contact_client(&address);

    for _ in 0..5 {
        client.submit(&valid_form()).await.unwrap();
    }

    let err = client.submit(&valid_form()).await.unwrap_err();

    let SubmitError::Api { status, message } = err else {
        panic!("expected an API error");
    };
    assert_eq!(status, 429);
    assert_eq!(message, "Too many requests. Please try again later.");
}

#[actix_web::test]
async fn connection_failure_wraps_the_cause() {
    // Nothing listens here; the bind above proves the port scheme works.
    let client = contact_client("http://127.0.0.1:1");

    let err = client.submit(&valid_form()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Network(_)));
    assert!(err.user_message().starts_with("Failed to submit contact form:"));
}
