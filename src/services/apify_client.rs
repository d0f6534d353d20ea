use reqwest::Client;
use serde::Deserialize;

use crate::domain::Article;

const BASE_URL: &str = "https://api.apify.com/v2";

/// The hosted actor that crawls the submitted sites and classifies articles.
const OVERSEAS_NEWS_ACTOR: &str = "winning_ics~guides-part-2";

const EXTRACT_DETAILED_INFORMATION: bool = true;
const MAX_RESULTS: u32 = 50;

#[derive(Debug, thiserror::Error)]
pub enum ApifyError {
    #[error("request to Apify failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Apify returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("actor run ended with status {0}")]
    RunFailed(String),
}

#[derive(Debug, serde::Serialize)]
pub struct StartUrl {
    pub url: String,
}

/// Input payload for the actor. Built fresh per submission, one `start_urls`
/// entry per submitted URL in order, duplicates kept.
#[derive(Debug, serde::Serialize)]
pub struct ActorInput {
    pub start_urls: Vec<StartUrl>,
    #[serde(rename = "extractDetailedInformation")]
    pub extract_detailed_information: bool,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
}

impl ActorInput {
    pub fn from_urls(urls: &[String]) -> Self {
        ActorInput {
            start_urls: urls
                .iter()
                .map(|url| StartUrl { url: url.clone() })
                .collect(),
            extract_detailed_information: EXTRACT_DETAILED_INFORMATION,
            max_results: MAX_RESULTS,
        }
    }
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    data: T,
}

#[derive(Deserialize)]
struct RunData {
    id: String,
    status: String,
    #[serde(rename = "defaultDatasetId")]
    default_dataset_id: String,
}

pub struct ApifyClient {
    client: Client,
    token: String,
    base_url: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        ApifyClient {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Start the actor, wait for it to finish, and read the dataset it wrote.
    /// One call per submission; no retries at any stage.
    pub async fn crawl_news(&self, urls: &[String]) -> Result<Vec<Article>, ApifyError> {
        let input = ActorInput::from_urls(urls);

        let run = self.start_run(&input).await?;
        log::info!("Apify run {} started for {} urls", run.id, urls.len());

        let run = self.wait_for_run(&run.id).await?;
        log::info!(
            "Apify run {} finished, reading dataset {}",
            run.id,
            run.default_dataset_id
        );

        let articles = self.dataset_items(&run.default_dataset_id).await?;
        log::info!("Fetched {} articles from Apify", articles.len());

        Ok(articles)
    }

    async fn start_run(&self, input: &ActorInput) -> Result<RunData, ApifyError> {
        let url = format!("{}/acts/{}/runs", self.base_url, OVERSEAS_NEWS_ACTOR);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let response: ApiResponse<RunData> = Self::read_json(response).await?;
        Ok(response.data)
    }

    /// Long-poll the run until it reaches a terminal status. `waitForFinish`
    /// holds each request open server-side for up to 60 seconds.
    async fn wait_for_run(&self, run_id: &str) -> Result<RunData, ApifyError> {
        loop {
            let url = format!("{}/actor-runs/{}?waitForFinish=60", self.base_url, run_id);
            let response = self.client.get(&url).bearer_auth(&self.token).send().await?;

            let response: ApiResponse<RunData> = Self::read_json(response).await?;
            match response.data.status.as_str() {
                "SUCCEEDED" => return Ok(response.data),
                "FAILED" | "ABORTED" | "TIMED-OUT" => {
                    return Err(ApifyError::RunFailed(response.data.status));
                }
                _ => continue,
            }
        }
    }

    async fn dataset_items(&self, dataset_id: &str) -> Result<Vec<Article>, ApifyError> {
        let url = format!(
            "{}/datasets/{}/items?format=json",
            self.base_url, dataset_id
        );
        let response = self.client.get(&url).bearer_auth(&self.token).send().await?;

        Self::read_json(response).await
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApifyError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
