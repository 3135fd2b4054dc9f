//! End-to-end tests of the service over a real TCP socket.

use goqldom_playground::DeploymentMode;
use goqldom_service::{ServiceError, bind, serve};
use pretty_assertions::assert_eq;
use tokio::{
    io::{AsyncReadExt as _, AsyncWriteExt as _},
    net::TcpStream,
};

async fn fetch_root(mode: DeploymentMode) -> String {
    let (listener, local) = bind("127.0.0.1:0").await.unwrap();
    tokio::spawn(serve(listener, mode));

    let mut stream = TcpStream::connect(local).await.unwrap();
    stream
        .write_all(
            format!("GET / HTTP/1.1\r\nHost: {local}\r\nConnection: close\r\n\r\n").as_bytes(),
        )
        .await
        .unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    assert!(
        response.starts_with("HTTP/1.1 200 OK\r\n"),
        "unexpected response:\n{response}",
    );
    response.replace(&local.to_string(), "LOCAL")
}

#[tokio::test]
async fn serves_playground_on_ephemeral_port() {
    let response = fetch_root(DeploymentMode::SameOrigin).await;

    assert!(response.contains("GraphQLPlayground.init"));
    assert_eq!(response.matches("http://LOCAL/graphql").count(), 3);
}

#[tokio::test]
async fn serves_fixed_remote_endpoints() {
    let response = fetch_root(DeploymentMode::FixedRemote).await;

    assert!(response.contains(r#""endpoint":"https://api.graph.cool/simple/v1/swapi""#));
    assert!(!response.contains("http://LOCAL/graphql"));
}

#[tokio::test]
async fn reports_unusable_address() {
    let (_taken, local) = bind("127.0.0.1:0").await.unwrap();

    let err = bind(&local.to_string()).await.unwrap_err();

    assert!(matches!(err, ServiceError::Bind { .. }), "{err:?}");
    assert!(
        err.to_string().starts_with(&format!("failed to listen on `{local}`: ")),
        "{err}",
    );
}
