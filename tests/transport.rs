mod common;

#[cfg(test)]
mod tests {
    use super::common::RecordingProgress;
    use piriform_updater::libs::error::UpdateError;
    use piriform_updater::libs::transport::{HttpTransport, Transport};
    use reqwest::{Client, StatusCode};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const CHUNKED_INSTALLER: &[u8] = b"HTTP/1.1 200 OK\r\n\
        Transfer-Encoding: chunked\r\n\
        Connection: close\r\n\
        \r\n\
        5\r\nMZ fa\r\n\
        6\r\nke ins\r\n\
        6\r\ntaller\r\n\
        0\r\n\r\n";

    const SIZED_INSTALLER: &[u8] = b"HTTP/1.1 200 OK\r\n\
        Content-Length: 17\r\n\
        Connection: close\r\n\
        \r\n\
        MZ fake installer";

    const NOT_FOUND: &[u8] = b"HTTP/1.1 404 Not Found\r\n\
        Content-Type: text/html\r\n\
        Content-Length: 22\r\n\
        Connection: close\r\n\
        \r\n\
        <h1>404 Not Found</h1>";

    const CHECK_RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
        Content-Type: text/plain\r\n\
        Content-Length: 7\r\n\
        Connection: close\r\n\
        \r\n\
        6.1.123";

    /// Serves `response` to a single connection and returns the base URL.
    async fn serve_once(response: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = socket.read(&mut buffer).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }
            socket.write_all(response).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", address)
    }

    fn transport() -> HttpTransport {
        HttpTransport::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn test_fetch_text_returns_body() {
        let host = serve_once(CHECK_RESPONSE).await;

        let body = transport().fetch_text(&format!("{}/auto?a=3&p=cc&v=6.0.0", host)).await.unwrap();

        assert_eq!(body, "6.1.123");
    }

    #[tokio::test]
    async fn test_fetch_text_error_status_fails() {
        let host = serve_once(NOT_FOUND).await;

        let err = transport().fetch_text(&format!("{}/auto", host)).await.unwrap_err();

        match err {
            UpdateError::Http(source) => assert_eq!(source.status(), Some(StatusCode::NOT_FOUND)),
            other => panic!("expected Http, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_download_error_status_writes_nothing() {
        let host = serve_once(NOT_FOUND).await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("ccsetup61.exe");
        let mut progress = RecordingProgress::default();

        let err = transport()
            .download(&format!("{}/ccsetup61.exe", host), &destination, &mut progress)
            .await
            .unwrap_err();

        assert!(matches!(err, UpdateError::Http(_)));
        assert!(!destination.exists(), "an error page must not be saved as the installer");
        assert!(progress.updates.is_empty());
        assert!(!progress.finished);
    }

    #[tokio::test]
    async fn test_download_with_content_length() {
        let host = serve_once(SIZED_INSTALLER).await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("ccsetup61.exe");
        let mut progress = RecordingProgress::default();

        let bytes = transport()
            .download(&format!("{}/ccsetup61.exe", host), &destination, &mut progress)
            .await
            .unwrap();

        assert_eq!(bytes, 17);
        assert_eq!(std::fs::read(&destination).unwrap(), b"MZ fake installer");
        assert!(progress.updates.iter().all(|(_, total)| *total == Some(17)));
        assert_eq!(progress.updates.last(), Some(&(17, Some(17))));
        assert!(progress.finished);
    }

    #[tokio::test]
    async fn test_download_chunked_without_content_length() {
        let host = serve_once(CHUNKED_INSTALLER).await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("ccsetup61.exe");
        let mut progress = RecordingProgress::default();

        let bytes = transport()
            .download(&format!("{}/ccsetup61.exe", host), &destination, &mut progress)
            .await
            .unwrap();

        assert_eq!(bytes, 17);
        assert_eq!(std::fs::read(&destination).unwrap(), b"MZ fake installer");
        assert!(progress.updates.iter().all(|(_, total)| total.is_none()));
        assert!(progress.updates.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert_eq!(progress.updates.last(), Some(&(17, None)));
        assert!(progress.finished);
    }
}
