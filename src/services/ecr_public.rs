//! Amazon ECR Public
//!
//! Repository, image and tag listings. All three calls share the same
//! `MaxResults` range (1-1000).

use crate::error::{Error, Result};
use crate::pagination::{Page, PageLimits, PageRequest, PagedOperation};
use crate::sdk::{opt_utc, SdkField};
use crate::services::non_empty;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ecrpublic::types::{ImageDetail, ImageTagDetail, Repository};
use aws_sdk_ecrpublic::Client;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// `MaxResults` bounds for ECR Public list calls
pub const LIMITS: PageLimits = PageLimits::new(1, 1000);

// ============================================================================
// DescribeRepositories
// ============================================================================

/// Parameters for `DescribeRepositories`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeRepositoriesParams {
    /// Registry to list; defaults to the caller's registry
    pub registry_id: Option<String>,
    /// Restrict to these repositories
    pub repository_names: Vec<String>,
}

/// A public repository
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    /// Repository name
    pub repository_name: Option<String>,
    /// Repository ARN
    pub repository_arn: Option<String>,
    /// Owning registry
    pub registry_id: Option<String>,
    /// URI used for `docker pull`
    pub repository_uri: Option<String>,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Repository> for RepositoryRecord {
    fn from(repository: &Repository) -> Self {
        Self {
            repository_name: repository.repository_name().into_field(),
            repository_arn: repository.repository_arn().into_field(),
            registry_id: repository.registry_id().into_field(),
            repository_uri: repository.repository_uri().into_field(),
            created_at: opt_utc(repository.created_at()),
        }
    }
}

/// `ecr-public describe-repositories`
#[derive(Debug, Clone)]
pub struct DescribeRepositories {
    client: Client,
}

impl DescribeRepositories {
    /// AWS operation name
    pub const NAME: &'static str = "DescribeRepositories";

    /// Create from a shared SDK config
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(Client::new(config))
    }

    /// Create from an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PagedOperation for DescribeRepositories {
    type Params = DescribeRepositoriesParams;
    type Item = RepositoryRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn limits(&self) -> PageLimits {
        LIMITS
    }

    async fn fetch_page(
        &self,
        request: &PageRequest<DescribeRepositoriesParams>,
    ) -> Result<Page<RepositoryRecord>> {
        let params = &request.params;

        // MaxResults is rejected when explicit repository names are given
        let max_results = if params.repository_names.is_empty() {
            request.page_size_hint
        } else {
            debug!("Repository names given; omitting page size");
            None
        };

        let output = self
            .client
            .describe_repositories()
            .set_registry_id(params.registry_id.clone())
            .set_repository_names(non_empty(&params.repository_names))
            .set_next_token(request.continuation_token.clone())
            .set_max_results(max_results)
            .send()
            .await
            .map_err(|e| Error::from_sdk(Self::NAME, e))?;

        let items = output
            .repositories()
            .iter()
            .map(RepositoryRecord::from)
            .collect();
        Ok(Page::from_parts(items, output.next_token().into_field()))
    }
}

// ============================================================================
// DescribeImages
// ============================================================================

/// Parameters for `DescribeImages`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeImagesParams {
    /// Registry to list; defaults to the caller's registry
    pub registry_id: Option<String>,
    /// Repository to list
    pub repository_name: String,
}

/// An image in a public repository
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Owning registry
    pub registry_id: Option<String>,
    /// Repository holding the image
    pub repository_name: Option<String>,
    /// Manifest digest
    pub image_digest: Option<String>,
    /// Tags in server order; empty when untagged
    pub image_tags: Vec<String>,
    /// Compressed size
    pub image_size_in_bytes: Option<i64>,
    /// Push time
    pub image_pushed_at: Option<DateTime<Utc>>,
    /// Manifest media type
    pub image_manifest_media_type: Option<String>,
    /// Artifact media type
    pub artifact_media_type: Option<String>,
}

impl From<&ImageDetail> for ImageRecord {
    fn from(image: &ImageDetail) -> Self {
        Self {
            registry_id: image.registry_id().into_field(),
            repository_name: image.repository_name().into_field(),
            image_digest: image.image_digest().into_field(),
            image_tags: image.image_tags().to_vec(),
            image_size_in_bytes: image.image_size_in_bytes().into_field(),
            image_pushed_at: opt_utc(image.image_pushed_at()),
            image_manifest_media_type: image.image_manifest_media_type().into_field(),
            artifact_media_type: image.artifact_media_type().into_field(),
        }
    }
}

/// `ecr-public describe-images`
#[derive(Debug, Clone)]
pub struct DescribeImages {
    client: Client,
}

impl DescribeImages {
    /// AWS operation name
    pub const NAME: &'static str = "DescribeImages";

    /// Create from a shared SDK config
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(Client::new(config))
    }

    /// Create from an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PagedOperation for DescribeImages {
    type Params = DescribeImagesParams;
    type Item = ImageRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn limits(&self) -> PageLimits {
        LIMITS
    }

    async fn fetch_page(
        &self,
        request: &PageRequest<DescribeImagesParams>,
    ) -> Result<Page<ImageRecord>> {
        let params = &request.params;
        let output = self
            .client
            .describe_images()
            .set_registry_id(params.registry_id.clone())
            .repository_name(&params.repository_name)
            .set_next_token(request.continuation_token.clone())
            .set_max_results(request.page_size_hint)
            .send()
            .await
            .map_err(|e| Error::from_sdk(Self::NAME, e))?;

        let items = output.image_details().iter().map(ImageRecord::from).collect();
        Ok(Page::from_parts(items, output.next_token().into_field()))
    }
}

// ============================================================================
// DescribeImageTags
// ============================================================================

/// Parameters for `DescribeImageTags`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeImageTagsParams {
    /// Registry to list; defaults to the caller's registry
    pub registry_id: Option<String>,
    /// Repository to list
    pub repository_name: String,
}

/// A tag and the image it points at
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageTagRecord {
    /// Tag name
    pub image_tag: Option<String>,
    /// When the tag was created
    pub created_at: Option<DateTime<Utc>>,
    /// Digest of the tagged image
    pub image_digest: Option<String>,
    /// Size of the tagged image
    pub image_size_in_bytes: Option<i64>,
    /// Push time of the tagged image
    pub image_pushed_at: Option<DateTime<Utc>>,
}

impl From<&ImageTagDetail> for ImageTagRecord {
    fn from(tag: &ImageTagDetail) -> Self {
        let image = tag.image_detail();
        Self {
            image_tag: tag.image_tag().into_field(),
            created_at: opt_utc(tag.created_at()),
            image_digest: image.and_then(|i| i.image_digest().into_field()),
            image_size_in_bytes: image.and_then(|i| i.image_size_in_bytes().into_field()),
            image_pushed_at: image.and_then(|i| opt_utc(i.image_pushed_at())),
        }
    }
}

/// `ecr-public describe-image-tags`
#[derive(Debug, Clone)]
pub struct DescribeImageTags {
    client: Client,
}

impl DescribeImageTags {
    /// AWS operation name
    pub const NAME: &'static str = "DescribeImageTags";

    /// Create from a shared SDK config
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(Client::new(config))
    }

    /// Create from an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PagedOperation for DescribeImageTags {
    type Params = DescribeImageTagsParams;
    type Item = ImageTagRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn limits(&self) -> PageLimits {
        LIMITS
    }

    async fn fetch_page(
        &self,
        request: &PageRequest<DescribeImageTagsParams>,
    ) -> Result<Page<ImageTagRecord>> {
        let params = &request.params;
        let output = self
            .client
            .describe_image_tags()
            .set_registry_id(params.registry_id.clone())
            .repository_name(&params.repository_name)
            .set_next_token(request.continuation_token.clone())
            .set_max_results(request.page_size_hint)
            .send()
            .await
            .map_err(|e| Error::from_sdk(Self::NAME, e))?;

        let items = output
            .image_tag_details()
            .iter()
            .map(ImageTagRecord::from)
            .collect();
        Ok(Page::from_parts(items, output.next_token().into_field()))
    }
}
