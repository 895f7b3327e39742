use reqwest::{Client, Response};

use crate::prelude::*;

#[derive(Debug)]
pub struct HttpClient {
    pub client: Client,
    pub base_url: String,
}

async fn parse_response(response: Response) -> Result<String> {
    let status_code = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| Error::GenericRequest(e.to_string()))?;

    if !(200..300).contains(&status_code) {
        return Err(Error::FeeQuote {
            status_code,
            error_message: text,
        });
    }
    Ok(text)
}

impl HttpClient {
    /// GET `{base_url}{path}` with the given query parameters, returning the
    /// response body. Non-2xx responses surface the body as error context.
    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<String> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| Error::GenericRequest(e.to_string()))?;
        parse_response(response).await
    }

    pub fn is_mainnet(&self) -> bool {
        self.base_url == crate::consts::MAINNET_API_URL
    }
}
