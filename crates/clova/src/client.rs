use bytes::Bytes;

use crate::error::Error;
use crate::types::Language;

pub const DEFAULT_API_BASE: &str = "https://naveropenapi.apigw.ntruss.com";

const RECOGNIZE_PATH: &str = "recog/v1/stt";
const CLIENT_ID_HEADER: &str = "X-NCP-APIGW-API-KEY-ID";
const CLIENT_SECRET_HEADER: &str = "X-NCP-APIGW-API-KEY";

#[derive(Default)]
pub struct ClovaClientBuilder {
    api_base: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl ClovaClientBuilder {
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn build(self) -> ClovaClient {
        ClovaClient {
            api_base: self.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            client_id: self.client_id.unwrap_or_default(),
            client_secret: self.client_secret.unwrap_or_default(),
            http: reqwest::Client::new(),
        }
    }
}

/// Client for the CSR short-audio recognition endpoint.
///
/// One request per [`recognize`] call; no retries, no timeout handling,
/// no cancellation of an in-flight request.
///
/// [`recognize`]: ClovaClient::recognize
pub struct ClovaClient {
    api_base: String,
    client_id: String,
    client_secret: String,
    http: reqwest::Client,
}

impl ClovaClient {
    pub fn builder() -> ClovaClientBuilder {
        ClovaClientBuilder::default()
    }

    pub fn from_env(env: &crate::Env) -> Self {
        Self::builder()
            .api_base(env.clova_api_base.clone())
            .client_id(env.clova_client_id.clone())
            .client_secret(env.clova_client_secret.clone())
            .build()
    }

    fn build_url(&self, language: Language) -> Result<url::Url, Error> {
        let mut url: url::Url = self.api_base.parse()?;

        {
            let mut path = url.path_segments_mut().map_err(|_| {
                Error::InvalidApiBase(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?;
            path.pop_if_empty();
            for segment in RECOGNIZE_PATH.split('/') {
                path.push(segment);
            }
        }

        url.query_pairs_mut().append_pair("lang", language.code());
        Ok(url)
    }

    /// Upload raw audio bytes and return the parsed response payload.
    ///
    /// The payload is opaque: it is returned verbatim with no shape
    /// interpretation. A non-2xx response becomes [`Error::Api`] carrying
    /// the status code and the response body text.
    pub async fn recognize(
        &self,
        audio: Bytes,
        language: Language,
    ) -> Result<serde_json::Value, Error> {
        let url = self.build_url(language)?;

        tracing::debug!(
            lang = %language,
            body_size_bytes = audio.len(),
            "recognize_request"
        );

        let response = self
            .http
            .post(url)
            .header(CLIENT_ID_HEADER, &self.client_id)
            .header(CLIENT_SECRET_HEADER, &self.client_secret)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(audio)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "recognize_failed");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
