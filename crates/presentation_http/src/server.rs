//! Server lifecycle with a bounded graceful shutdown

use std::{
    future::{Future, IntoFuture},
    io,
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves
///
/// After the signal, in-flight requests get at most `drain_timeout` to
/// finish. Connections still open after that are dropped.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    let drain_deadline = async move {
        if signalled_rx.await.is_ok() {
            info!("Waiting up to {:?} for connections to close...", drain_timeout);
            tokio::time::sleep(drain_timeout).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => result,
        () = drain_deadline => {
            warn!(timeout = ?drain_timeout, "Graceful shutdown timed out, dropping open connections");
            Ok(())
        }
    }
}
