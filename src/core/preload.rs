use crate::domain::model::{Service, ServiceStatus};
use crate::domain::ports::ImageLoader;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use url::Url;

/// 預載階段，依序推進。`Cancelled` 只會在呼叫 cancel 後出現。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreloadPhase {
    Critical,
    Important,
    Background,
    Complete,
    Cancelled,
}

impl PreloadPhase {
    pub fn is_finished(&self) -> bool {
        matches!(self, PreloadPhase::Complete | PreloadPhase::Cancelled)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreloadPlan {
    pub critical: Vec<String>,
    pub important: Vec<String>,
    pub background: Vec<String>,
}

impl PreloadPlan {
    /// 從目錄推導：精選服務縮圖為 critical，其他 active 縮圖為 important，
    /// 圖庫與影片封面放到 background。
    pub fn from_services(services: &[Service]) -> Self {
        let mut plan = PreloadPlan::default();

        for service in services.iter().filter(|s| s.status == ServiceStatus::Active) {
            if service.featured {
                plan.critical.push(service.thumbnail.clone());
            } else {
                plan.important.push(service.thumbnail.clone());
            }

            if let Some(media) = &service.media {
                plan.background.extend(media.gallery.iter().cloned());
            }
        }

        plan
    }

    /// 合併額外的 URL，已存在的不重複加入
    pub fn extend(&mut self, other: PreloadPlan) {
        fn merge(target: &mut Vec<String>, extra: Vec<String>) {
            for url in extra {
                if !target.contains(&url) {
                    target.push(url);
                }
            }
        }

        merge(&mut self.critical, other.critical);
        merge(&mut self.important, other.important);
        merge(&mut self.background, other.background);
    }

    pub fn total(&self) -> usize {
        self.critical.len() + self.important.len() + self.background.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreloadProgress {
    pub phase: PreloadPhase,
    /// 目前階段已完成數（成功與失敗都算）
    pub completed: usize,
    /// 目前階段的總數
    pub total: usize,
    pub loaded_overall: usize,
    pub failed_overall: usize,
}

impl PreloadProgress {
    fn starting(phase: PreloadPhase, total: usize) -> Self {
        Self {
            phase,
            completed: 0,
            total,
            loaded_overall: 0,
            failed_overall: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreloadReport {
    pub loaded: usize,
    pub failed: Vec<String>,
}

impl PreloadReport {
    pub fn completed(&self) -> usize {
        self.loaded + self.failed.len()
    }
}

pub struct ImagePreloader<L: ImageLoader> {
    loader: Arc<L>,
}

impl<L: ImageLoader> ImagePreloader<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }

    /// 在背景執行預載，回傳可查詢進度與取消的 handle
    pub fn spawn(&self, plan: PreloadPlan) -> PreloadHandle {
        let (sender, receiver) = watch::channel(PreloadProgress::starting(
            PreloadPhase::Critical,
            plan.critical.len(),
        ));
        let (cancel, cancel_rx) = watch::channel(false);
        let task = tokio::spawn(run_phases(self.loader.clone(), plan, sender, cancel_rx));

        PreloadHandle {
            task,
            cancel,
            receiver,
        }
    }

    /// 執行完整預載並等待結束
    pub async fn run(&self, plan: PreloadPlan) -> PreloadReport {
        let (sender, _receiver) = watch::channel(PreloadProgress::starting(
            PreloadPhase::Critical,
            plan.critical.len(),
        ));
        let (_cancel, cancel_rx) = watch::channel(false);
        run_phases(self.loader.clone(), plan, sender, cancel_rx).await
    }
}

/// 背景預載的 handle。
///
/// 進度的 sender 只由背景任務持有，任務結束後 channel 即關閉，
/// 所有訂閱者的 `changed()` 會回傳錯誤而不是永遠等待。
pub struct PreloadHandle {
    task: JoinHandle<PreloadReport>,
    cancel: watch::Sender<bool>,
    receiver: watch::Receiver<PreloadProgress>,
}

impl PreloadHandle {
    pub fn progress(&self) -> PreloadProgress {
        self.receiver.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PreloadProgress> {
        self.receiver.clone()
    }

    /// 等到進入 `phase`（或之後的階段）為止；預載提早結束時回傳最後的進度
    pub async fn wait_for(&mut self, phase: PreloadPhase) -> PreloadProgress {
        if let Ok(progress) = self.receiver.wait_for(|p| p.phase >= phase).await {
            return progress.clone();
        }
        let progress = self.receiver.borrow().clone();
        progress
    }

    pub async fn join(self) -> Result<PreloadReport> {
        self.task.await.map_err(|e| CatalogError::PreloadError {
            message: format!("preload task failed: {}", e),
        })
    }

    /// 要求背景任務中止進行中的載入並等它結束。若預載已先完成，保留原本的最終狀態。
    pub async fn cancel(self) -> PreloadProgress {
        // 背景任務已結束時 send 會失敗，此時不需要再通知
        let _ = self.cancel.send(true);
        if let Err(e) = self.task.await {
            tracing::error!("❌ Preload task panicked: {}", e);
        }
        let progress = self.receiver.borrow().clone();
        progress
    }
}

/// 收到取消要求時完成；handle 被丟棄（不會再取消）時永遠不完成
async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    let closed = cancel.wait_for(|requested| *requested).await.is_err();
    if closed {
        std::future::pending::<()>().await;
    }
}

async fn run_phases<L: ImageLoader>(
    loader: Arc<L>,
    plan: PreloadPlan,
    sender: watch::Sender<PreloadProgress>,
    mut cancel: watch::Receiver<bool>,
) -> PreloadReport {
    let mut report = PreloadReport::default();
    let phases = [
        (PreloadPhase::Critical, plan.critical),
        (PreloadPhase::Important, plan.important),
        (PreloadPhase::Background, plan.background),
    ];

    for (phase, urls) in phases {
        let total = urls.len();
        tracing::debug!("Preload phase {:?}: {} images", phase, total);
        sender.send_modify(|p| {
            p.phase = phase;
            p.completed = 0;
            p.total = total;
        });

        let mut tasks = JoinSet::new();
        for url in urls {
            let loader = loader.clone();
            tasks.spawn(async move {
                let result = loader.load(&url).await;
                (url, result)
            });
        }

        let mut completed = 0;
        loop {
            let joined = tokio::select! {
                biased;
                _ = cancelled(&mut cancel) => {
                    tasks.abort_all();
                    sender.send_modify(|p| p.phase = PreloadPhase::Cancelled);
                    tracing::info!(
                        "🛑 Image preload cancelled during {:?} ({}/{})",
                        phase,
                        completed,
                        total
                    );
                    return report;
                }
                joined = tasks.join_next() => joined,
            };
            let Some(joined) = joined else {
                break;
            };

            completed += 1;
            let ok = match joined {
                Ok((_, Ok(()))) => {
                    report.loaded += 1;
                    true
                }
                Ok((url, Err(e))) => {
                    tracing::warn!("⚠️ Failed to preload {}: {}", url, e);
                    report.failed.push(url);
                    false
                }
                Err(e) => {
                    tracing::warn!("⚠️ Preload task aborted: {}", e);
                    report.failed.push(String::from("<aborted>"));
                    false
                }
            };

            sender.send_modify(|p| {
                p.completed = completed;
                if ok {
                    p.loaded_overall += 1;
                } else {
                    p.failed_overall += 1;
                }
            });
        }

        tracing::debug!("Preload phase {:?} finished ({}/{})", phase, completed, total);
    }

    sender.send_modify(|p| {
        p.phase = PreloadPhase::Complete;
        p.completed = 0;
        p.total = 0;
    });
    tracing::info!(
        "✅ Image preload complete: {} loaded, {} failed",
        report.loaded,
        report.failed.len()
    );

    report
}

/// 以 HTTP GET 下載圖片並讀完回應內容
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    client: Client,
    base_url: Option<Url>,
}

impl HttpImageLoader {
    pub fn new(base_url: Option<Url>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    fn resolve(&self, url: &str) -> Result<Url> {
        if let Ok(absolute) = Url::parse(url) {
            return Ok(absolute);
        }

        match &self.base_url {
            Some(base) => base.join(url).map_err(|e| CatalogError::ImageLoadError {
                url: url.to_string(),
                message: format!("cannot resolve against {}: {}", base, e),
            }),
            None => Err(CatalogError::ImageLoadError {
                url: url.to_string(),
                message: "relative path without a configured base URL".to_string(),
            }),
        }
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, url: &str) -> Result<()> {
        let resolved = self.resolve(url)?;
        tracing::debug!("Loading image: {}", resolved);

        let response = self.client.get(resolved).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::ImageLoadError {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Loaded {} ({} bytes)", url, bytes.len());
        Ok(())
    }
}
