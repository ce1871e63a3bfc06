use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use uuid::Uuid;

/// Blob storage boundary. Uploads assign a collision-resistant filename
/// under the given path prefix and return a public URL; deletion takes the
/// URL back.
#[async_trait]
pub trait StorageService: Send + Sync {
    async fn upload(&self, data: Vec<u8>, content_type: &str, path_prefix: &str) -> Result<String>;
    async fn delete_by_url(&self, url: &str) -> Result<()>;
    async fn get_object(&self, key: &str) -> Result<Vec<u8>>;
    async fn object_exists(&self, key: &str) -> Result<bool>;
}

pub struct S3StorageService {
    client: Client,
    bucket: String,
    /// Base under which uploaded objects are publicly reachable,
    /// e.g. `https://cdn.example.com` or `http://localhost:9000/agency`.
    public_base_url: String,
}

impl S3StorageService {
    pub fn new(client: Client, bucket: String, public_base_url: String) -> Self {
        Self {
            client,
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn extension_for(content_type: &str) -> &'static str {
        match content_type {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            "image/webp" => "webp",
            _ => "bin",
        }
    }

    fn key_for_url(&self, url: &str) -> Result<String> {
        url.strip_prefix(&format!("{}/", self.public_base_url))
            .map(|k| k.to_string())
            .ok_or_else(|| anyhow::anyhow!("URL '{}' is outside managed storage", url))
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn upload(&self, data: Vec<u8>, content_type: &str, path_prefix: &str) -> Result<String> {
        let key = format!(
            "{}/{}.{}",
            path_prefix.trim_matches('/'),
            Uuid::new_v4(),
            Self::extension_for(content_type)
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await?;

        Ok(format!("{}/{}", self.public_base_url, key))
    }

    async fn delete_by_url(&self, url: &str) -> Result<()> {
        let key = self.key_for_url(url)?;
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await?;
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Vec<u8>> {
        let res = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await?;
        let data = res.body.collect().await?.to_vec();
        Ok(data)
    }

    async fn object_exists(&self, key: &str) -> Result<bool> {
        let res = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        match res {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_not_found() {
                    Ok(false)
                } else {
                    Err(anyhow::anyhow!(service_error))
                }
            }
        }
    }
}
