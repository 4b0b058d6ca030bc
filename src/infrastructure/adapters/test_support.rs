//! 测试用本地 HTTP 桩服务

use axum::Router;
use tokio::net::TcpListener;

/// 在随机端口启动桩服务，返回 base URL
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
