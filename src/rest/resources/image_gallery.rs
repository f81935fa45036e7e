//! Image gallery resource implementation.
//!
//! Gallery images are used in page content; `drawio` images are diagrams
//! made with the built-in draw.io editor.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::clients::rest::write_file;
use crate::clients::{FileUpload, ResponseBody, RestClient};
use crate::rest::{
    Creatable, Deletable, Listable, Payload, Readable, Resource, ResourceError, Updatable,
};

/// Multipart field name for image files.
const IMAGE_FIELD: &str = "image";

/// The kind of gallery image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[default]
    Gallery,
    Drawio,
}

/// Handle for the `image-gallery` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ImageGallery<'a> {
    client: &'a RestClient,
}

impl<'a> ImageGallery<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Fetches the raw image file. A JSON reply yields empty bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn read_data(&self, id: u64) -> Result<Vec<u8>, ResourceError> {
        let path = format!("{}/data", Self::item_path(id));
        let body = self.client.get(&path, &[]).await?;
        Ok(binary_or_empty(body))
    }

    /// Fetches the raw image file behind a full image URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn read_data_for_url(&self, url: &str) -> Result<Vec<u8>, ResourceError> {
        let path = format!("{}/url/data", Self::ENDPOINT);
        let body = self
            .client
            .get(&path, &[("url".to_string(), url.to_string())])
            .await?;
        Ok(binary_or_empty(body))
    }

    /// Saves an image to `output_path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Io`] if the file cannot be written, or
    /// [`ResourceError::Rest`] for transport errors.
    pub async fn download(
        &self,
        id: u64,
        output_path: impl AsRef<Path>,
    ) -> Result<PathBuf, ResourceError> {
        let output_path = output_path.as_ref();
        let data = self.read_data(id).await?;
        write_file(output_path, &data).await?;
        Ok(output_path.to_path_buf())
    }
}

fn binary_or_empty(body: ResponseBody) -> Vec<u8> {
    match body {
        ResponseBody::Binary(bytes) => bytes,
        ResponseBody::Structured(_) => Vec::new(),
    }
}

impl Resource for ImageGallery<'_> {
    const ENDPOINT: &'static str = "image-gallery";
    const NAME: &'static str = "Image";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for ImageGallery<'_> {}
impl Readable for ImageGallery<'_> {}
impl Deletable for ImageGallery<'_> {}

impl Creatable for ImageGallery<'_> {
    type Create = ImageCreate;
}

impl Updatable for ImageGallery<'_> {
    type Update = ImageUpdate;
}

/// Payload for uploading an image.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageCreate {
    #[serde(rename = "type")]
    pub image_type: ImageType,
    /// Page the image belongs to.
    pub uploaded_to: u64,
    /// Display name; the server uses the file name when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip)]
    pub image: FileUpload,
}

impl ImageCreate {
    /// Starts a gallery image upload for a page.
    #[must_use]
    pub fn new(uploaded_to: u64, image: FileUpload) -> Self {
        Self {
            image_type: ImageType::Gallery,
            uploaded_to,
            name: None,
            image,
        }
    }

    /// Sets the image type.
    #[must_use]
    pub const fn with_type(mut self, image_type: ImageType) -> Self {
        self.image_type = image_type;
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Payload for ImageCreate {
    fn files(&self) -> Vec<FileUpload> {
        vec![self.image.clone().with_field(IMAGE_FIELD)]
    }
}

/// Payload for renaming or replacing an image.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ImageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement image file.
    #[serde(skip)]
    pub image: Option<FileUpload>,
}

impl Payload for ImageUpdate {
    fn files(&self) -> Vec<FileUpload> {
        self.image
            .iter()
            .map(|image| image.clone().with_field(IMAGE_FIELD))
            .collect()
    }
}
