//! Tests for notifier module

#[cfg(test)]
mod http_notifier_tests {
    use url::Url;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::notifier::{ChatNotifier, HttpChatNotifier, NotifyError};

    #[tokio::test]
    async fn posts_text_payload_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "text": "hello team" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/chat", server.uri())).unwrap();
        let notifier = HttpChatNotifier::new(url);

        notifier.notify("hello team").await.unwrap();
    }

    #[tokio::test]
    async fn accepts_any_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let notifier = HttpChatNotifier::new(url);

        assert!(notifier.notify("hello").await.is_ok());
    }

    #[tokio::test]
    async fn server_error_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let notifier = HttpChatNotifier::new(url);

        let error = notifier.notify("hello").await.unwrap_err();

        assert!(matches!(
            error,
            NotifyError::UnexpectedStatus { status: 500 }
        ));
    }

    #[tokio::test]
    async fn client_error_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let notifier = HttpChatNotifier::new(url);

        let error = notifier.notify("hello").await.unwrap_err();

        assert!(matches!(
            error,
            NotifyError::UnexpectedStatus { status: 404 }
        ));
    }

    #[tokio::test]
    async fn connection_failure_is_a_request_error() {
        // Start a server just to reserve a port, then drop it so the
        // connection is refused. The builder variant is not pooled, so
        // dropping it actually closes the port.
        let server = MockServer::builder().start().await;
        let url = Url::parse(&server.uri()).unwrap();
        drop(server);

        let notifier = HttpChatNotifier::new(url);

        let error = notifier.notify("hello").await.unwrap_err();

        assert!(matches!(error, NotifyError::Request(_)));
    }
}
