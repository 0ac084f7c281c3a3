//! PostgREST client for a single table - builds requests and decodes rows

use std::time::Duration;

use crate::config::Config;
use crate::constants::REST_PATH;
use crate::models::{Item, NewItem};
use crate::store::StoreError;

/// Handle to one remote table.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct StoreClient {
    http: reqwest::Client,
    table_url: String,
    api_key: String,
}

impl StoreClient {
    pub fn new(config: &Config) -> Self {
        StoreClient {
            http: create_client(config.request_timeout_secs),
            table_url: format!(
                "{}{}/{}",
                config.url.trim_end_matches('/'),
                REST_PATH,
                config.table
            ),
            api_key: config.api_key.clone(),
        }
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    /// `GET /rest/v1/<table>?select=*`
    pub fn select_all_request(&self) -> reqwest::RequestBuilder {
        self.authorized(self.http.get(&self.table_url))
            .query(&[("select", "*")])
    }

    /// `POST /rest/v1/<table>` with a one-element array body
    pub fn insert_request(&self, record: &NewItem) -> reqwest::RequestBuilder {
        self.authorized(self.http.post(&self.table_url))
            .header("Prefer", "return=minimal")
            .json(&[record])
    }

    /// `DELETE /rest/v1/<table>?id=eq.<id>`
    pub fn delete_request(&self, item_id: i64) -> reqwest::RequestBuilder {
        self.authorized(self.http.delete(&self.table_url))
            .query(&[("id", format!("eq.{}", item_id))])
    }

    pub async fn select_all(&self) -> Result<Vec<Item>, StoreError> {
        let body = send(self.select_all_request()).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn insert(&self, record: &NewItem) -> Result<(), StoreError> {
        send(self.insert_request(record)).await?;
        Ok(())
    }

    pub async fn delete(&self, item_id: i64) -> Result<(), StoreError> {
        send(self.delete_request(item_id)).await?;
        Ok(())
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", self.api_key.as_str())
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

/// Send a request and return the body of a 2xx response
async fn send(builder: reqwest::RequestBuilder) -> Result<String, StoreError> {
    let resp = builder.send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(StoreError::from_body(status.as_u16(), &body));
    }
    Ok(body)
}

/// Create an HTTP client; no timeout unless one is configured
pub fn create_client(timeout_secs: Option<u64>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StoreClient {
        StoreClient::new(&Config {
            url: "https://demo.supabase.co".into(),
            api_key: "anon-key".into(),
            table: "items".into(),
            request_timeout_secs: None,
        })
    }

    fn header<'a>(req: &'a reqwest::Request, name: &str) -> Option<&'a str> {
        req.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn select_all_targets_table_with_wildcard() {
        let req = client().select_all_request().build().unwrap();
        assert_eq!(req.method(), reqwest::Method::GET);
        assert_eq!(
            req.url().as_str(),
            "https://demo.supabase.co/rest/v1/items?select=*"
        );
        assert_eq!(header(&req, "apikey"), Some("anon-key"));
        assert_eq!(header(&req, "authorization"), Some("Bearer anon-key"));
    }

    #[test]
    fn insert_sends_record_as_array() {
        let record = NewItem {
            id: "2".into(),
            name: "Nut".into(),
            description: String::new(),
            quantity: "5".into(),
        };
        let req = client().insert_request(&record).build().unwrap();
        assert_eq!(req.method(), reqwest::Method::POST);
        assert_eq!(req.url().as_str(), "https://demo.supabase.co/rest/v1/items");
        assert_eq!(header(&req, "content-type"), Some("application/json"));
        assert_eq!(header(&req, "prefer"), Some("return=minimal"));

        let bytes = req.body().and_then(|b| b.as_bytes()).unwrap();
        let body: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!([{"id": "2", "name": "Nut", "description": "", "quantity": "5"}])
        );
    }

    #[test]
    fn delete_matches_on_id() {
        let req = client().delete_request(42).build().unwrap();
        assert_eq!(req.method(), reqwest::Method::DELETE);
        assert_eq!(
            req.url().as_str(),
            "https://demo.supabase.co/rest/v1/items?id=eq.42"
        );
        assert!(req.body().is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = StoreClient::new(&Config {
            url: "http://localhost:54321/".into(),
            api_key: "k".into(),
            table: "parts".into(),
            request_timeout_secs: Some(5),
        });
        assert_eq!(client.table_url(), "http://localhost:54321/rest/v1/parts");
    }
}
