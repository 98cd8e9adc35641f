use api::Controller;
use hyper::{server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use quizflow::{bank, handler};
use std::{
    convert::Infallible,
    env::{self, VarError},
    future::Future,
    io,
    net::{Ipv4Addr, SocketAddr},
    path::Path,
    sync::Arc,
    time::Duration,
};
use tokio::{net::TcpListener, runtime::Runtime, sync::watch, task::JoinSet};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let port: u16 = env::var("PORT")?.parse()?;
    let timeout = lock_timeout(env::var("LOCK_TIMEOUT_MS"))?;
    let bank = match env::var_os("QUIZ_PATH") {
        Some(path) => bank::from_path(Path::new(&path))?,
        _ => bank::capitals()?,
    };
    log::info!("Loaded {} questions.", bank.len());

    // Initialize service handler
    let flow = Arc::new(Controller::new(bank, timeout));
    let addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, port).into();
    let runtime = Runtime::new()?;
    runtime.block_on(async {
        let listener = TcpListener::bind(addr).await?;
        log::info!("Listening on {addr}.");
        serve(listener, flow, tokio::signal::ctrl_c()).await
    })
}

fn lock_timeout(var: Result<String, VarError>) -> anyhow::Result<Duration> {
    match var {
        Ok(millis) => Ok(Duration::from_millis(millis.parse()?)),
        Err(VarError::NotPresent) => Ok(Duration::from_secs(5)),
        Err(err) => Err(err.into()),
    }
}

/// Serves connections until `shutdown` resolves, then lets in-flight requests finish.
async fn serve<F>(listener: TcpListener, flow: Arc<Controller>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    // Dropping the sender tells every connection to wind down.
    let (stop_tx, stop_rx) = watch::channel(());
    let mut conns = JoinSet::new();
    let mut signal = core::pin::pin!(shutdown);
    loop {
        let (stream, peer) = tokio::select! {
            biased;
            result = &mut signal => {
                result?;
                break;
            }
            Some(joined) = conns.join_next() => {
                if let Err(err) = joined {
                    log::error!("Connection task failed: {err}");
                }
                continue;
            }
            conn = listener.accept() => match conn {
                Ok(conn) => conn,
                Err(err) => {
                    log::error!("Failed to accept connection: {err}");
                    continue;
                }
            },
        };

        let flow = flow.clone();
        let mut stop = stop_rx.clone();
        conns.spawn(async move {
            let service = service_fn(move |req| {
                let flow = flow.clone();
                async move { Ok::<_, Infallible>(handler::respond(req, &flow).await) }
            });

            let conn = http1::Builder::new().serve_connection(TokioIo::new(stream), service);
            let mut conn = core::pin::pin!(conn);
            let result = tokio::select! {
                result = conn.as_mut() => result,
                _ = stop.changed() => {
                    conn.as_mut().graceful_shutdown();
                    conn.await
                }
            };

            if let Err(err) = result {
                log::error!("Connection with {peer} failed: {err}");
            }
        });
    }

    log::info!("Shutting down. Draining {} connections.", conns.len());
    drop(listener);
    drop(stop_tx);
    while let Some(joined) = conns.join_next().await {
        if let Err(err) = joined {
            log::error!("Connection task failed: {err}");
        }
    }

    Ok(())
}
