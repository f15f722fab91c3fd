use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;
use crate::timings::WeeklyTimings;

/// A vendor record as served by the platform backend: the profile
/// fields the admin tooling cares about plus the weekly opening hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Minimum order amount in the platform currency, if the vendor
    /// has one configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<f64>,
    pub timings: WeeklyTimings,
}

/// Client for the platform admin API.
#[derive(Clone, Debug)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl BackendClient {
    /// Create a new client with configurable timeouts. The token, when
    /// present, is sent as a bearer credential on every request.
    pub fn new(
        base_url: String,
        network_config: &NetworkConfig,
        auth_token: Option<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(network_config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(network_config.connect_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch a vendor record by id.
    pub async fn fetch_vendor(&self, vendor_id: &str) -> Result<VendorRecord> {
        let url = format!("{}/vendors/{}", self.base_url, vendor_id);
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .context("Failed to send request to backend")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Backend returned error status: {}", status);
        }

        let record = response
            .json::<VendorRecord>()
            .await
            .context("Failed to parse vendor record")?;

        Ok(record)
    }

    /// Replace a vendor's weekly timings. Callers are expected to have
    /// validated the timings first; the backend rejects nothing the
    /// validation layer would not.
    pub async fn update_timings(&self, vendor_id: &str, timings: &WeeklyTimings) -> Result<()> {
        let url = format!("{}/vendors/{}/timings", self.base_url, vendor_id);
        let response = self
            .authorize(self.client.put(&url))
            .json(timings)
            .send()
            .await
            .context("Failed to send timings update to backend")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Backend returned error status: {}", status);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== VendorRecord Parsing Tests ====================

    #[test]
    fn test_vendor_record_minimal_json() {
        let json = r#"{
            "id": "v-12",
            "name": "Golden Wok",
            "timings": {
                "monday": {"is_open": false},
                "tuesday": {"is_open": false},
                "wednesday": {"is_open": false},
                "thursday": {"is_open": false},
                "friday": {"is_open": false},
                "saturday": {"is_open": false},
                "sunday": {"is_open": false}
            }
        }"#;

        let record: VendorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "v-12");
        assert_eq!(record.name, "Golden Wok");
        assert!(record.email.is_empty());
        assert!(record.min_order_amount.is_none());
        assert!(record.timings.all_closed());
    }

    #[test]
    fn test_vendor_record_full_json() {
        let json = r#"{
            "id": "v-7",
            "name": "Stall 7",
            "email": "owner@example.com",
            "phone": "+49 89 1234567",
            "min_order_amount": 15.5,
            "timings": {
                "monday": {"is_open": true, "start_time": "09:00", "end_time": "17:00"},
                "tuesday": {"is_open": false},
                "wednesday": {"is_open": false},
                "thursday": {"is_open": false},
                "friday": {"is_open": false},
                "saturday": {"is_open": false},
                "sunday": {"is_open": false}
            }
        }"#;

        let record: VendorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.min_order_amount, Some(15.5));
        assert!(record.timings.monday.is_open);
    }

    // ==================== BackendClient Construction Tests ====================

    #[test]
    fn test_client_creation() {
        let config = NetworkConfig {
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        };
        let result = BackendClient::new("https://example.com".to_string(), &config, None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_client_creation_with_token() {
        let config = NetworkConfig {
            request_timeout_secs: 60,
            connect_timeout_secs: 20,
        };
        let result = BackendClient::new(
            "https://admin.example.com".to_string(),
            &config,
            Some("token".to_string()),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = NetworkConfig::default();
        let client =
            BackendClient::new("https://example.com/".to_string(), &config, None).unwrap();
        assert_eq!(client.base_url, "https://example.com");
    }
}
