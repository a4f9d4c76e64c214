use crate::utils::error::Result;
use async_trait::async_trait;

/// 圖片載入器：成功或失敗都算完成，由預載閘門負責計數
#[async_trait]
pub trait ImageLoader: Send + Sync + 'static {
    async fn load(&self, url: &str) -> Result<()>;
}

/// 簡單的鍵值偏好設定儲存（對應瀏覽器的 localStorage）
pub trait PreferenceStore: Send + Sync {
    fn read(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn write(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
