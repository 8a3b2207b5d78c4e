use crate::client::Client;
use crate::error::Result;
use crate::pagination::Page;
use crate::pagination::PageParams;
use crate::types::Voice;
use crate::types::VoiceConfig;

/// Voices resource for managing synthesis voices.
pub struct Voices<'a> {
    client: &'a Client,
}

impl<'a> Voices<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List voices.
    pub async fn list(&self, paging: Option<PageParams>) -> Result<Page<Voice>> {
        let query = paging.map(|p| p.to_query()).unwrap_or_default();
        self.client.get("/voices/list", &query).await
    }

    /// Get a voice by identifier.
    pub async fn get(&self, id: &str) -> Result<Voice> {
        self.client.get("/voices", &[("id", id.to_string())]).await
    }

    /// Create a voice.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vocode_sdk::Client;
    /// use vocode_sdk::types::AzureVoice;
    /// use vocode_sdk::types::VoiceConfig;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::from_env()?;
    ///
    /// let voice = client
    ///     .voices()
    ///     .create(VoiceConfig::Azure(AzureVoice {
    ///         voice_name: "en-US-JennyNeural".to_string(),
    ///         pitch: 0,
    ///         rate: 15,
    ///     }))
    ///     .await?;
    ///
    /// println!("created voice {}", voice.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, config: VoiceConfig) -> Result<Voice> {
        let body = serde_json::to_value(&config)?;
        self.client.post("/voices/create", &[], Some(body)).await
    }

    /// Update a voice.
    pub async fn update(&self, id: &str, config: VoiceConfig) -> Result<Voice> {
        let body = serde_json::to_value(&config)?;
        self.client
            .post("/voices/update", &[("id", id.to_string())], Some(body))
            .await
    }
}
