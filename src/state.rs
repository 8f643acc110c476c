use crate::domain::traits::Translator;
use crate::infrastructure::config::ServerConfig;
use dashmap::DashSet;
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn Translator>,
    pub busy: Arc<DashSet<IpAddr>>,
    pub config: Arc<ServerConfig>,
    ready: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(translator: Arc<dyn Translator>, config: ServerConfig) -> Self {
        Self {
            translator,
            busy: Arc::new(DashSet::new()),
            config: Arc::new(config),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.config.cooldown_ms)
    }

    /// Mark `ip` busy. Returns `None` if it already is.
    ///
    /// The returned guard frees the address one cooldown after it is dropped.
    pub fn try_acquire(&self, ip: IpAddr) -> Option<BusyGuard> {
        if self.busy.insert(ip) {
            Some(BusyGuard {
                busy: Arc::clone(&self.busy),
                ip,
                cooldown: self.cooldown(),
            })
        } else {
            None
        }
    }
}

/// Keeps an address on the busy list; see [`AppState::try_acquire`].
pub struct BusyGuard {
    busy: Arc<DashSet<IpAddr>>,
    ip: IpAddr,
    cooldown: Duration,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let busy = Arc::clone(&self.busy);
        let ip = self.ip;
        let cooldown = self.cooldown;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(cooldown).await;
                    busy.remove(&ip);
                });
            }
            // no runtime left to wait on
            Err(_) => {
                busy.remove(&ip);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::OdlError;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl Translator for Echo {
        async fn translate(&self, _from: &str, _to: &str, content: &str) -> Result<Option<String>, OdlError> {
            Ok(Some(content.to_string()))
        }
    }

    fn state(cooldown_ms: u64) -> AppState {
        AppState::new(
            Arc::new(Echo),
            ServerConfig {
                cooldown_ms,
                ..ServerConfig::default()
            },
        )
    }

    #[test]
    fn starts_not_ready() {
        let state = state(0);
        assert!(!state.is_ready());
        state.mark_ready();
        assert!(state.is_ready());
    }

    #[tokio::test]
    async fn second_acquire_is_refused_until_cooldown_passes() {
        let state = state(50);
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        let other: IpAddr = "10.0.0.2".parse().unwrap();

        let guard = state.try_acquire(ip).expect("first acquire");
        assert!(state.try_acquire(ip).is_none());
        assert!(state.try_acquire(other).is_some());

        drop(guard);
        // still cooling down right after release
        assert!(state.busy.contains(&ip));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!state.busy.contains(&ip));
        assert!(state.try_acquire(ip).is_some());
    }

    #[tokio::test]
    async fn aborted_holder_releases_after_cooldown() {
        let state = state(50);
        let ip: IpAddr = "10.0.0.3".parse().unwrap();

        let holder = {
            let state = state.clone();
            tokio::spawn(async move {
                let _guard = state.try_acquire(ip);
                std::future::pending::<()>().await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(state.busy.contains(&ip));

        holder.abort();
        let _ = holder.await;
        assert!(state.try_acquire(ip).is_none());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!state.busy.contains(&ip));
    }
}
